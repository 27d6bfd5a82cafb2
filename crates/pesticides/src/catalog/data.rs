//! Label data for the insecticides in the product table.

use super::efficacy::{EffectRating, Efficacy};
use super::product::{PreHarvestInterval, Product};

/// Column headers, in output order
pub const COLUMNS: [&str; 10] = [
    "Product",
    "Active Ingredient",
    "Use Restrictions",
    "EPA Reg No.",
    "IRAC Group",
    "Rate/A",
    "REI (hours)",
    "PHI (days)",
    "Effect on Adults",
    "Effect on Nymphs",
];

const POOR: EffectRating = EffectRating::Single(Efficacy::Poor);
const GOOD: EffectRating = EffectRating::Single(Efficacy::Good);
const EXCELLENT: EffectRating = EffectRating::Single(Efficacy::Excellent);
const GOOD_TO_EXCELLENT: EffectRating = EffectRating::Range(Efficacy::Good, Efficacy::Excellent);

const fn days(d: u32) -> PreHarvestInterval {
    PreHarvestInterval::Days(d)
}

#[rustfmt::skip]
pub static PESTICIDES: [Product; 20] = [
    Product::new("Actara", "thiamethoxam", "NYS, LI", "100-938", "4A", 3.5, 12, days(5), EXCELLENT, EXCELLENT),
    Product::new("Drexel Carbaryl 4L", "carbaryl", "NR", "19713-49", "1A", 2.0, 48, days(7), EXCELLENT, EXCELLENT),
    Product::new("Imidan 70WP", "phosmet", "NYS", "10163-169", "1B", 1.333, 336, days(7), EXCELLENT, POOR),
    Product::new("Dupont Avant", "indoxacarb", "NR", "352-597", "22A", 6.0, 12, days(7), EXCELLENT, POOR),
    Product::new("Brigade WSB", "bifenthrin", "F", "279-3108", "3A", 8.0, 12, days(30), EXCELLENT, EXCELLENT),
    Product::new("Brigade WSB (researcher 2(ee))", "bifenthrin", "F", "279-3108", "3A", 10.0, 12, days(30), EXCELLENT, EXCELLENT),
    Product::new("Brigade 2EC", "bifenthrin", "F", "279-3313", "3A", 6.4, 12, days(30), EXCELLENT, EXCELLENT),
    Product::new("Hero", "zeta-cypermethrin & bifenthrin", "F", "279-3315", "3A", 5.0, 12, days(30), EXCELLENT, EXCELLENT),
    Product::new("Mustang MAXX", "zeta-cypermethrin", "F", "279-3426", "3A", 4.0, 12, days(1), EXCELLENT, GOOD),
    Product::new("Sniper Helios", "bifenthrin", "F", "34704-858", "3A", 3.2, 12, days(30), EXCELLENT, EXCELLENT),
    Product::new("Danitol 2.4 EC", "fenpropathrin", "F", "59639-35", "3A", 16.0, 24, days(21), EXCELLENT, EXCELLENT),
    Product::new("Pryonil Crop Spray", "Pyrethrin+PPO", "NYS", "89459-26", "3A", 12.0, 12, days(0), GOOD, GOOD),
    Product::new("Swagger", "bifenthrin & imidacloprid", "F", "34704-1045", "3A, 4A", 7.6, 12, days(30), GOOD_TO_EXCELLENT, GOOD_TO_EXCELLENT),
    Product::new("BotaniGard MAXX", "Beauveria bassiana (strain GHA) + pyrethrins", "NR", "82074-5-68539", "UN, 3A", 8.0, 12, PreHarvestInterval::UNTIL_DRY, GOOD, GOOD),
    Product::new("Xpectro OD", "Beauveria bassiana (strain GHA) + pyrethrins", "NR", "82074-5", "UN, 3A", 8.0, 12, PreHarvestInterval::UNTIL_DRY, GOOD, GOOD),
    Product::new("Aza-Direct", "azadirachtin", "NR", "71908-1-10163", "UN", 1.0, 4, days(0), GOOD, GOOD),
    Product::new("M-Pede", "potassium salts of fatty acids (insecticidal soap)", "NR", "10163-324", "UN", 1.0, 12, days(0), GOOD, GOOD),
    Product::new("Mycotrol ESO", "Beauveria bassiana", "NR", "82074-1", "UN", 0.25, 4, PreHarvestInterval::UP_TO_HARVEST, GOOD, GOOD),
    Product::new("BoteGHA ES", "Beauveria bassiana (strain GHA)", "NR", "82074-1", "UN", 0.25, 4, PreHarvestInterval::UP_TO_HARVEST, GOOD, GOOD),
    Product::new("BotaniGard ES", "Beauveria bassiana (strain GHA)", "NR", "82074-1-68539", "UN", 0.25, 4, PreHarvestInterval::UP_TO_HARVEST, GOOD, GOOD),
];
