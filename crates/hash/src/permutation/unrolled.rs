use super::{Permute, ROUND_CONSTANTS, ROUNDS};
use crate::STATE_LANES;

/// Fully unrolled Keccak-f[1600].
///
/// Lanes live in 25 named locals; each loop iteration runs one round from
/// the `a` set into the `e` set and a second round back, so no lane is ever
/// copied between rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrolled;

/// One row of chi: five rotated inputs in, five lanes out.
macro_rules! chi {
    ($o0:ident, $o1:ident, $o2:ident, $o3:ident, $o4:ident <-
     $b0:expr, $b1:expr, $b2:expr, $b3:expr, $b4:expr) => {{
        let (b0, b1, b2, b3, b4) = ($b0, $b1, $b2, $b3, $b4);
        $o0 = b0 ^ (!b1 & b2);
        $o1 = b1 ^ (!b2 & b3);
        $o2 = b2 ^ (!b3 & b4);
        $o3 = b3 ^ (!b4 & b0);
        $o4 = b4 ^ (!b0 & b1);
    }};
}

/// One full round reading the lanes named in the first list and writing the
/// lanes named in the second. Lane order is `x + 5y`.
macro_rules! round {
    ([$ba:ident, $be:ident, $bi:ident, $bo:ident, $bu:ident,
      $ga:ident, $ge:ident, $gi:ident, $go:ident, $gu:ident,
      $ka:ident, $ke:ident, $ki:ident, $ko:ident, $ku:ident,
      $ma:ident, $me:ident, $mi:ident, $mo:ident, $mu:ident,
      $sa:ident, $se:ident, $si:ident, $so:ident, $su:ident] =>
     [$oba:ident, $obe:ident, $obi:ident, $obo:ident, $obu:ident,
      $oga:ident, $oge:ident, $ogi:ident, $ogo:ident, $ogu:ident,
      $oka:ident, $oke:ident, $oki:ident, $oko:ident, $oku:ident,
      $oma:ident, $ome:ident, $omi:ident, $omo:ident, $omu:ident,
      $osa:ident, $ose:ident, $osi:ident, $oso:ident, $osu:ident],
     $rc:expr) => {{
        let c0 = $ba ^ $ga ^ $ka ^ $ma ^ $sa;
        let c1 = $be ^ $ge ^ $ke ^ $me ^ $se;
        let c2 = $bi ^ $gi ^ $ki ^ $mi ^ $si;
        let c3 = $bo ^ $go ^ $ko ^ $mo ^ $so;
        let c4 = $bu ^ $gu ^ $ku ^ $mu ^ $su;
        let d0 = c4 ^ c1.rotate_left(1);
        let d1 = c0 ^ c2.rotate_left(1);
        let d2 = c1 ^ c3.rotate_left(1);
        let d3 = c2 ^ c4.rotate_left(1);
        let d4 = c3 ^ c0.rotate_left(1);

        chi!($oba, $obe, $obi, $obo, $obu <-
            $ba ^ d0,
            ($ge ^ d1).rotate_left(44),
            ($ki ^ d2).rotate_left(43),
            ($mo ^ d3).rotate_left(21),
            ($su ^ d4).rotate_left(14));
        $oba ^= $rc;

        chi!($oga, $oge, $ogi, $ogo, $ogu <-
            ($bo ^ d3).rotate_left(28),
            ($gu ^ d4).rotate_left(20),
            ($ka ^ d0).rotate_left(3),
            ($me ^ d1).rotate_left(45),
            ($si ^ d2).rotate_left(61));

        chi!($oka, $oke, $oki, $oko, $oku <-
            ($be ^ d1).rotate_left(1),
            ($gi ^ d2).rotate_left(6),
            ($ko ^ d3).rotate_left(25),
            ($mu ^ d4).rotate_left(8),
            ($sa ^ d0).rotate_left(18));

        chi!($oma, $ome, $omi, $omo, $omu <-
            ($bu ^ d4).rotate_left(27),
            ($ga ^ d0).rotate_left(36),
            ($ke ^ d1).rotate_left(10),
            ($mi ^ d2).rotate_left(15),
            ($so ^ d3).rotate_left(56));

        chi!($osa, $ose, $osi, $oso, $osu <-
            ($bi ^ d2).rotate_left(62),
            ($go ^ d3).rotate_left(55),
            ($ku ^ d4).rotate_left(39),
            ($ma ^ d0).rotate_left(41),
            ($se ^ d1).rotate_left(2));
    }};
}

impl Permute for Unrolled {
    #[allow(unused_assignments, clippy::too_many_lines)]
    #[rustfmt::skip]
    fn permute(lanes: &mut [u64; STATE_LANES]) {
        let [
            mut aba, mut abe, mut abi, mut abo, mut abu,
            mut aga, mut age, mut agi, mut ago, mut agu,
            mut aka, mut ake, mut aki, mut ako, mut aku,
            mut ama, mut ame, mut ami, mut amo, mut amu,
            mut asa, mut ase, mut asi, mut aso, mut asu,
        ] = *lanes;

        let [
            mut eba, mut ebe, mut ebi, mut ebo, mut ebu,
            mut ega, mut ege, mut egi, mut ego, mut egu,
            mut eka, mut eke, mut eki, mut eko, mut eku,
            mut ema, mut eme, mut emi, mut emo, mut emu,
            mut esa, mut ese, mut esi, mut eso, mut esu,
        ] = [0u64; STATE_LANES];

        for i in (0..ROUNDS).step_by(2) {
            round!(
                [aba, abe, abi, abo, abu, aga, age, agi, ago, agu, aka, ake, aki, ako, aku,
                 ama, ame, ami, amo, amu, asa, ase, asi, aso, asu] =>
                [eba, ebe, ebi, ebo, ebu, ega, ege, egi, ego, egu, eka, eke, eki, eko, eku,
                 ema, eme, emi, emo, emu, esa, ese, esi, eso, esu],
                ROUND_CONSTANTS[i]
            );
            round!(
                [eba, ebe, ebi, ebo, ebu, ega, ege, egi, ego, egu, eka, eke, eki, eko, eku,
                 ema, eme, emi, emo, emu, esa, ese, esi, eso, esu] =>
                [aba, abe, abi, abo, abu, aga, age, agi, ago, agu, aka, ake, aki, ako, aku,
                 ama, ame, ami, amo, amu, asa, ase, asi, aso, asu],
                ROUND_CONSTANTS[i + 1]
            );
        }

        *lanes = [
            aba, abe, abi, abo, abu,
            aga, age, agi, ago, agu,
            aka, ake, aki, ako, aku,
            ama, ame, ami, amo, amu,
            asa, ase, asi, aso, asu,
        ];
    }
}
