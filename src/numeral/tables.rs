//! Fixed English vocabularies used by the numeral composer.

/// Words for 0..=19. Zero maps to the empty string so it drops out of a group.
pub const UNITS: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the multiples of ten, indexed by the tens digit.
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words indexed by magnitude level, where level `k` is the group at `1000^k`.
///
/// The index is the level, so the keys are contiguous by construction.
pub const SCALE: [&str; 51] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quinquadecillion",
    "sexdecillion",
    "septen-decillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "tresvigintillion",
    "quattuorvigintillion",
    "quinquavigintillion",
    "sesvigintillion",
    "septemvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
    "trestrigintillion",
    "quattuortrigintillion",
    "quinquatrigintillion",
    "sestrigintillion",
    "septentrigintillion",
    "octotrigintillion",
    "noventrigintillion",
    "quadragintillion",
    "unquadragintillion",
    "duoquadragintillion",
    "tresquadragintillion",
    "quattuorquadragintillion",
    "quinquaquadragintillion",
    "sesquadragintillion",
    "septenquadragintillion",
    "octoquadragintillion",
    "novenquadragintillion",
];

/// Highest magnitude level with a scale word.
pub const MAX_LEVEL: usize = SCALE.len() - 1;

/// Scale word for a magnitude level, or `None` past the vocabulary.
pub fn scale_word(level: usize) -> Option<&'static str> {
    SCALE.get(level).copied()
}

/// Name of the largest supported unit, used in overflow diagnostics.
pub fn largest_unit() -> &'static str {
    SCALE[MAX_LEVEL]
}
