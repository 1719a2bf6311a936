//! Static lookup tables: Miller-Rabin witnesses, exact prime counts at anchor points,
//! Möbius values and the classic lists of special primes within the `i64` range.

/// The smallest prime.
pub const MIN_PRIME: i64 = 2;

/// The largest prime representable as an `i64`.
pub const MAX_PRIME: i64 = 9_223_372_036_854_775_783;

/// The largest integer a IEEE 754 double represents exactly, 2^53 - 1.
pub const MAX_SAFE_JS_NUMBER: i64 = 9_007_199_254_740_991;

/// Miller-Rabin bases. The first four give a deterministic test below 2^31,
/// all twelve are deterministic below 3.3 * 10^24, hence for every `u64`.
pub const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Number of leading [WITNESSES] needed for targets not exceeding `i32::MAX`.
pub const WITNESSES_31BIT: usize = 4;

/// Möbius function μ(k) for k = 1..=64, index 0 is unused.
pub const MOEBIUS: [i8; 65] = [
    0, 1, -1, -1, 0, -1, 1, -1, 0, 0,
    1, -1, 0, -1, 1, 1, 0, -1, 0, -1,
    0, 1, 1, -1, 0, 0, 1, 0, 0, -1,
    -1, -1, 0, 1, 1, 1, 0, -1, 1, 1,
    0, -1, -1, -1, 0, 0, 1, -1, 0, 0,
    0, 1, 0, -1, 0, 1, 0, 1, 1, -1,
    0, -1, 1, 0, 0,
];

/// Exact values of π(x) at D * 10^P, 2^P and at `i32::MAX`, `i64::MAX`, sorted by x.
pub const ANCHORS: [(i64, i64); 226] = [
    (2, 1),
    (4, 2),
    (8, 4),
    (10, 4),
    (16, 6),
    (20, 8),
    (30, 10),
    (32, 11),
    (40, 12),
    (50, 15),
    (60, 17),
    (64, 18),
    (70, 19),
    (80, 22),
    (90, 24),
    (100, 25),
    (128, 31),
    (200, 46),
    (256, 54),
    (300, 62),
    (400, 78),
    (500, 95),
    (512, 97),
    (600, 109),
    (700, 125),
    (800, 139),
    (900, 154),
    (1_000, 168),
    (1_024, 172),
    (2_000, 303),
    (2_048, 309),
    (3_000, 430),
    (4_000, 550),
    (4_096, 564),
    (5_000, 669),
    (6_000, 783),
    (7_000, 900),
    (8_000, 1_007),
    (8_192, 1_028),
    (9_000, 1_117),
    (10_000, 1_229),
    (16_384, 1_900),
    (20_000, 2_262),
    (30_000, 3_245),
    (32_768, 3_512),
    (40_000, 4_203),
    (50_000, 5_133),
    (60_000, 6_057),
    (65_536, 6_542),
    (70_000, 6_935),
    (80_000, 7_837),
    (90_000, 8_713),
    (100_000, 9_592),
    (131_072, 12_251),
    (200_000, 17_984),
    (262_144, 23_000),
    (300_000, 25_997),
    (400_000, 33_860),
    (500_000, 41_538),
    (524_288, 43_390),
    (600_000, 49_098),
    (700_000, 56_543),
    (800_000, 63_951),
    (900_000, 71_274),
    (1_000_000, 78_498),
    (1_048_576, 82_025),
    (2_000_000, 148_933),
    (2_097_152, 155_611),
    (3_000_000, 216_816),
    (4_000_000, 283_146),
    (4_194_304, 295_947),
    (5_000_000, 348_513),
    (6_000_000, 412_849),
    (7_000_000, 476_648),
    (8_000_000, 539_777),
    (8_388_608, 564_163),
    (9_000_000, 602_489),
    (10_000_000, 664_579),
    (16_777_216, 1_077_871),
    (20_000_000, 1_270_607),
    (30_000_000, 1_857_859),
    (33_554_432, 2_063_689),
    (40_000_000, 2_433_654),
    (50_000_000, 3_001_134),
    (60_000_000, 3_562_115),
    (67_108_864, 3_957_809),
    (70_000_000, 4_118_064),
    (80_000_000, 4_669_382),
    (90_000_000, 5_216_954),
    (100_000_000, 5_761_455),
    (134_217_728, 7_603_553),
    (200_000_000, 11_078_937),
    (268_435_456, 14_630_843),
    (300_000_000, 16_252_325),
    (400_000_000, 21_336_326),
    (500_000_000, 26_355_867),
    (536_870_912, 28_192_750),
    (600_000_000, 31_324_703),
    (700_000_000, 36_252_931),
    (800_000_000, 41_146_179),
    (900_000_000, 46_009_215),
    (1_000_000_000, 50_847_534),
    (1_073_741_824, 54_400_028),
    (2_000_000_000, 98_222_287),
    (2_147_483_647, 105_097_565),
    (2_147_483_648, 105_097_565),
    (3_000_000_000, 144_449_537),
    (4_000_000_000, 189_961_812),
    (4_294_967_296, 203_280_221),
    (5_000_000_000, 234_954_223),
    (6_000_000_000, 279_545_368),
    (7_000_000_000, 323_804_352),
    (8_000_000_000, 367_783_654),
    (8_589_934_592, 393_615_806),
    (9_000_000_000, 411_523_195),
    (10_000_000_000, 455_052_511),
    (17_179_869_184, 762_939_111),
    (20_000_000_000, 882_206_716),
    (30_000_000_000, 1_300_005_926),
    (34_359_738_368, 1_480_206_279),
    (40_000_000_000, 1_711_955_433),
    (50_000_000_000, 2_119_654_578),
    (60_000_000_000, 2_524_038_155),
    (68_719_476_736, 2_874_398_515),
    (70_000_000_000, 2_925_699_539),
    (80_000_000_000, 3_325_059_246),
    (90_000_000_000, 3_722_428_991),
    (100_000_000_000, 4_118_054_813),
    (137_438_953_472, 5_586_502_348),
    (200_000_000_000, 8_007_105_059),
    (274_877_906_944, 10_866_266_172),
    (300_000_000_000, 11_818_439_135),
    (400_000_000_000, 15_581_005_657),
    (500_000_000_000, 19_308_136_142),
    (549_755_813_888, 21_151_907_950),
    (600_000_000_000, 23_007_501_786),
    (700_000_000_000, 26_684_074_310),
    (800_000_000_000, 30_341_383_527),
    (900_000_000_000, 33_981_987_586),
    (1_000_000_000_000, 37_607_912_018),
    (1_099_511_627_776, 41_203_088_796),
    (2_000_000_000_000, 73_301_896_139),
    (2_199_023_255_552, 80_316_571_436),
    (3_000_000_000_000, 108_340_298_703),
    (4_000_000_000_000, 142_966_208_126),
    (4_398_046_511_104, 156_661_034_233),
    (5_000_000_000_000, 177_291_661_649),
    (6_000_000_000_000, 211_381_427_039),
    (7_000_000_000_000, 245_277_688_804),
    (8_000_000_000_000, 279_010_070_811),
    (8_796_093_022_208, 305_761_713_237),
    (9_000_000_000_000, 312_600_354_108),
    (10_000_000_000_000, 346_065_536_839),
    (17_592_186_044_416, 597_116_381_732),
    (20_000_000_000_000, 675_895_909_271),
    (30_000_000_000_000, 1_000_121_668_853),
    (35_184_372_088_832, 1_166_746_786_182),
    (40_000_000_000_000, 1_320_811_971_702),
    (50_000_000_000_000, 1_638_923_764_567),
    (60_000_000_000_000, 1_955_010_428_258),
    (70_000_000_000_000, 2_269_432_871_304),
    (70_368_744_177_664, 2_280_998_753_949),
    (80_000_000_000_000, 2_582_444_113_487),
    (90_000_000_000_000, 2_894_232_250_783),
    (100_000_000_000_000, 3_204_941_750_802),
    (140_737_488_355_328, 4_461_632_979_717),
    (200_000_000_000_000, 6_270_424_651_315),
    (281_474_976_710_656, 8_731_188_863_470),
    (300_000_000_000_000, 9_287_441_600_280),
    (400_000_000_000_000, 12_273_824_155_491),
    (500_000_000_000_000, 15_237_833_654_620),
    (562_949_953_421_312, 17_094_432_576_778),
    (600_000_000_000_000, 18_184_255_291_570),
    (700_000_000_000_000, 21_116_208_911_023),
    (800_000_000_000_000, 24_035_890_368_161),
    (900_000_000_000_000, 26_944_926_466_221),
    (1_000_000_000_000_000, 29_844_570_422_669),
    (1_125_899_906_842_624, 33_483_379_603_407),
    (2_000_000_000_000_000, 58_478_215_681_891),
    (2_251_799_813_685_248, 65_612_899_915_304),
    (3_000_000_000_000_000, 86_688_602_810_119),
    (4_000_000_000_000_000, 114_630_988_904_000),
    (4_503_599_627_370_496, 128_625_503_610_475),
    (5_000_000_000_000_000, 142_377_417_196_364),
    (6_000_000_000_000_000, 169_969_662_554_551),
    (7_000_000_000_000_000, 197_434_994_078_331),
    (8_000_000_000_000_000, 224_792_606_318_600),
    (9_000_000_000_000_000, 252_056_733_453_928),
    (9_007_199_254_740_992, 252_252_704_148_404),
    (10_000_000_000_000_000, 279_238_341_033_925),
    (18_014_398_509_481_984, 494_890_204_904_784),
    (20_000_000_000_000_000, 547_863_431_950_008),
    (30_000_000_000_000_000, 812_760_276_789_503),
    (36_028_797_018_963_968, 971_269_945_245_201),
    (40_000_000_000_000_000, 1_075_292_778_753_150),
    (50_000_000_000_000_000, 1_336_094_767_763_971),
    (60_000_000_000_000_000, 1_595_534_099_589_274),
    (70_000_000_000_000_000, 1_853_851_099_626_620),
    (72_057_594_037_927_936, 1_906_879_381_028_850),
    (80_000_000_000_000_000, 2_111_215_026_220_444),
    (90_000_000_000_000_000, 2_367_751_438_410_550),
    (100_000_000_000_000_000, 2_623_557_157_654_233),
    (144_115_188_075_855_872, 3_745_011_184_713_964),
    (200_000_000_000_000_000, 5_153_329_362_645_908),
    (288_230_376_151_711_744, 7_357_400_267_843_990),
    (300_000_000_000_000_000, 7_650_011_911_220_803),
    (400_000_000_000_000_000, 10_125_681_208_311_322),
    (500_000_000_000_000_000, 12_585_956_566_571_620),
    (576_460_752_303_423_488, 14_458_792_895_301_660),
    (600_000_000_000_000_000, 15_034_102_021_263_820),
    (700_000_000_000_000_000, 17_472_251_499_627_256),
    (800_000_000_000_000_000, 19_901_908_567_967_065),
    (900_000_000_000_000_000, 22_324_189_231_374_849),
    (1_000_000_000_000_000_000, 24_739_954_287_740_860),
    (1_152_921_504_606_846_976, 28_423_094_496_953_330),
    (2_000_000_000_000_000_000, 48_645_161_281_738_535),
    (2_305_843_009_213_693_952, 55_890_484_045_084_135),
    (3_000_000_000_000_000_000, 72_254_704_797_687_083),
    (4_000_000_000_000_000_000, 95_676_260_903_887_607),
    (4_611_686_018_427_387_904, 109_932_807_585_469_973),
    (5_000_000_000_000_000_000, 118_959_989_688_273_472),
    (6_000_000_000_000_000_000, 142_135_049_412_622_144),
    (7_000_000_000_000_000_000, 165_220_513_980_969_424),
    (8_000_000_000_000_000_000, 188_229_829_247_429_504),
    (9_000_000_000_000_000_000, 211_172_979_243_258_278),
    (9_223_372_036_854_775_807, 216_289_611_853_439_384),
];

/// Primes of the form 2^p - 1 (p = 2, 3, 5, 7, 13, 17, 19, 31, 61).
pub const MERSENNE_PRIMES: [i64; 9] = [
    3,
    7,
    31,
    127,
    8191,
    131_071,
    524_287,
    2_147_483_647,
    2_305_843_009_213_693_951,
];

/// Perfect numbers 2^(p-1) * (2^p - 1), one for each Mersenne prime except 2^61 - 1.
pub const PERFECT_NUMBERS: [i64; 8] = [
    6,
    28,
    496,
    8128,
    33_550_336,
    8_589_869_056,
    137_438_691_328,
    2_305_843_008_139_952_128,
];

/// Primes of the form 2^(2^k) + 1, the only five known.
pub const FERMAT_PRIMES: [i64; 5] = [3, 5, 17, 257, 65_537];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime;

    #[test]
    fn anchors_are_sorted_test() {
        for pair in ANCHORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "anchor keys out of order at {}", pair[1].0);
            assert!(pair[0].1 <= pair[1].1, "anchor counts decrease at {}", pair[1].0);
        }
        assert_eq!(ANCHORS.first(), Some(&(2, 1)));
        assert_eq!(ANCHORS.last().map(|a| a.0), Some(i64::MAX));
        assert!(ANCHORS.binary_search_by_key(&(i32::MAX as i64), |a| a.0).is_ok());
    }

    #[test]
    fn moebius_test() {
        // μ(n) = 0 exactly when n has a square factor
        for k in 1..MOEBIUS.len() {
            let square_free = (2..=8).all(|d: usize| k % (d * d) != 0);
            assert_eq!(MOEBIUS[k] != 0, square_free, "moebius on {}", k);
        }
        assert_eq!(MOEBIUS[30], -1);
        assert_eq!(MOEBIUS[35], 1);
    }

    #[test]
    fn special_numbers_test() {
        assert_eq!(
            MERSENNE_PRIMES,
            [3, 7, 31, 127, 8191, 131071, 524287, 2147483647, 2305843009213693951]
        );
        assert_eq!(
            PERFECT_NUMBERS,
            [6, 28, 496, 8128, 33550336, 8589869056, 137438691328, 2305843008139952128]
        );
        assert_eq!(FERMAT_PRIMES, [3, 5, 17, 257, 65537]);

        for (i, m) in MERSENNE_PRIMES.iter().enumerate() {
            assert!(is_prime(*m));
            assert!((*m as u64 + 1).is_power_of_two());
            if let Some(perfect) = PERFECT_NUMBERS.get(i) {
                assert_eq!(m * (m + 1) / 2, *perfect);
            }
        }
        for (k, f) in FERMAT_PRIMES.iter().enumerate() {
            assert!(is_prime(*f));
            assert_eq!(*f, (1i64 << (1 << k)) + 1);
        }
        assert!(is_prime(MAX_PRIME));
        assert!(((MAX_PRIME + 1)..=i64::MAX).all(|n| !is_prime(n)));
    }
}
