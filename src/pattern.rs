// src/pattern.rs

use std::collections::HashSet;

use once_cell::sync::Lazy;

// ----- EMOTICONS -----

// Glyphs made mostly of digits or dots ("0.0", "8)", ":1") are left out, as are
// "):" and "B)": they collide with numbers, versions, times and enumerations
// like "(b):" far more often than they appear as emoticons.
pub static EMOTICONS: &[&str] = &[
    ":)", ":-)", ":))", ":-))", ":)))", ":-)))", "(:", "(-:", "=)", "(=", ":]", ":-]", "[:", "[-:", "[=", "=]",
    ":o)", "(o:", ":}", ":-}", ";)", ";-)", "(;", "(-;", ":(", ":-(", ":((", ":-((", ":(((", ":-(((",
    ")-:", "=(", ">:(", ":')", ":'-)", ":'(", ":'-(", ":/", ":-/", "=/", "=|", ":|", ":-|", "]=", "=[",
    ":P", ":-P", ":p", ":-p", ":O", ":-O", ":o", ":-o", ":()", ">:o", ":*", ":-*", ":3", ":-3",
    ":>", ":->", ":X", ":-X", ":x", ":-x", ":D", ":-D", ";D", ";-D", "=D", "xD", "XD", "xDD", "XDD",
    ";P", ";-P", ";p", ";-p", ":$", ":-$", ":@", ":-@", ":\\", ":-\\",
    "^_^", "^__^", "^___^", "^^", ">.<", ">.>", "<.<", ";_;", "T_T", "-_-", "-__-", "v_v", "V_V",
    "o_o", "o_O", "O_o", "O_O", "@_@", "<3", "<33", "<333", "</3", "<\\3",
    "(^_^)", "(-_-)", "(>_<)", "(*_*)", "(¬_¬)", "ಠ_ಠ", "ಠ︵ಠ", "(ಠ_ಠ)", "¯\\(ツ)/¯", "¯\\_(ツ)_/¯",
    "(╯°□°）╯︵┻━┻", "><(((*>",
];

/// Emoticon glyphs plus user additions, longest first and deduplicated, ready
/// for a leftmost-first Aho-Corasick matcher.
pub fn emoticon_literals(extra: &[String]) -> Vec<String> {
    let mut literals: Vec<String> = EMOTICONS.iter().map(|s| s.to_string()).collect();
    literals.extend(extra.iter().filter(|s| !s.is_empty()).cloned());

    // With LeftmostFirst the first listed pattern wins among matches starting
    // at the same position, so longer glyphs have to come first.
    literals.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let mut seen = HashSet::new();
    literals.retain(|lit| seen.insert(lit.clone()));
    literals
}

// ----- ABBREVIATIONS -----

fn abbreviations_list() -> Vec<&'static str> {
    vec![
        "a.m.", "Adm.", "approx.", "Bros.", "co.", "Co.", "Corp.", "D.C.", "Dr.",
        "e.g.", "E.g.", "E.G.", "etc.", "Gen.", "Gov.", "i.e.", "I.e.", "I.E.",
        "Inc.", "Jr.", "Ltd.", "Md.", "Messrs.", "Mo.", "Mont.", "Mr.", "Mrs.",
        "Ms.", "Mt.", "No.", "p.m.", "Ph.D.", "Prof.", "Rep.", "Rev.", "Sen.", "Sr.", "St.",
        "vs.", "v.s.", "viz.", "U.S.", "U.K.", "N.Y.", "L.A.",
        // months
        "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Sept.",
        "Oct.", "Nov.", "Dec.",
        // states
        "Ala.", "Ariz.", "Ark.", "Calif.", "Colo.", "Conn.", "Del.", "Fla.", "Ga.",
        "Ill.", "Ind.", "Kan.", "Kans.", "Ky.", "La.", "Mass.", "Mich.", "Minn.",
        "Miss.", "Neb.", "Nebr.", "Nev.", "Okla.", "Ore.", "Pa.", "Tenn.", "Va.",
        "Wash.", "Wis.",
    ]
}

pub static ABBREVIATIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| abbreviations_list().into_iter().collect());

/// Letter-dot runs such as `U.S.A.` or `e.g.` that are abbreviations even
/// when absent from [`ABBREVIATIONS`].
pub const ABBREVIATION_SHAPE_PATTERN: &str = r"^(?:\p{L}\.){2,}$";

// ----- RECOGNIZER PATTERNS -----

// Scheme URLs, mailto: links and bare www. hosts. The body runs to whitespace
// or an angle bracket/double quote, and never ends on trailing punctuation.
// Parentheses only appear as balanced `(...)` groups, so `Foo_(bar)` keeps
// its closing paren and an enclosing `(...)` stays outside.
pub const URL_PATTERN: &str = concat!(
    r"(?<![\w+.\-])",
    r"(?:[A-Za-z][A-Za-z0-9+.\-]{1,15}://|(?i:mailto):|(?i:www)\.)",
    r#"(?:\([^\s<>"()]*\)|[^\s<>"()])*"#,
    r#"(?:\([^\s<>"()]*\)|[^\s<>"'.,;:!?()\]}])"#,
);

// local[:password]@domain, the domain needs at least one dot.
pub const EMAIL_PATTERN: &str = concat!(
    r"(?<![\w.+\-])",
    r"[\w.+\-]+",
    r"(?::[\w.+\-]+)?",
    r"@[\w\-]+(?:\.[\w\-]+)+",
);

pub const HTML_ENTITY_PATTERN: &str =
    r"&(?:[A-Za-z][A-Za-z0-9]{1,31}|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});";

pub const HASHTAG_PATTERN: &str = r"(?<![\w&#])#(?=\w*[^\W_])\w+";

pub const MENTION_PATTERN: &str = r"(?<![\w@.])@(?=\w*[^\W_])\w+";

pub const NAMED_EMOTICON_PATTERN: &str = r":[A-Za-z][A-Za-z0-9_+\-]+:";
