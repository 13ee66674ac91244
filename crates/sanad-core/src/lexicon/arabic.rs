//! # Arabic Lexicon
//!
//! ## Irregular Forms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hundred   100 → مائة            200 → مائتان       else <d> مائة       │
//! │  thousand    1 → ألف               2 → ألفان                             │
//! │           3–10 → <n> آلاف        ≥11 → <n> ألف                           │
//! │  million / billion: <n> مليون / <n> مليار, no irregular forms           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The conjunction "و" attaches to the word after it: "عشرون وواحد".

use super::{join_nonempty, Digits, Lexicon};
use crate::types::{Language, Scale};

const AND: &str = " و";

static DIGITS: Digits = Digits {
    ones: [
        "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
    ],
    teens: [
        "عشرة",
        "أحد عشر",
        "اثنا عشر",
        "ثلاثة عشر",
        "أربعة عشر",
        "خمسة عشر",
        "ستة عشر",
        "سبعة عشر",
        "ثمانية عشر",
        "تسعة عشر",
    ],
    tens: [
        "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
    ],
};

pub static ARABIC: Lexicon = Lexicon {
    language: Language::Arabic,
    zero: "صفر",
    negative: "سالب",
    group_joiner: AND,
    cents_joiner: AND,
    cents_word: "سنت",
    currency_names: ["دولار أمريكي", "دينار عراقي"],
    group,
    tens,
    scaled,
};

fn tens(n: u8) -> String {
    DIGITS.below_hundred(n, AND)
}

fn hundreds(digit: usize) -> String {
    match digit {
        0 => String::new(),
        1 => "مائة".to_string(),
        2 => "مائتان".to_string(),
        d => format!("{} مائة", DIGITS.ones[d]),
    }
}

fn group(n: u16) -> String {
    let head = hundreds(usize::from(n / 100));
    join_nonempty([head, tens((n % 100) as u8)], AND)
}

fn scaled(n: u16, scale: Scale) -> String {
    match scale {
        Scale::Thousand => match n {
            1 => "ألف".to_string(),
            2 => "ألفان".to_string(),
            3..=10 => format!("{} آلاف", group(n)),
            _ => format!("{} ألف", group(n)),
        },
        Scale::Million => format!("{} مليون", group(n)),
        Scale::Billion => format!("{} مليار", group(n)),
    }
}
