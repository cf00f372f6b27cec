//! Named HTML character references and their synthetic DTD rendering.
//!
//! The table is an arbitrarily shortened slice of the HTML entity sets — the
//! Latin-1, special, and symbol references web developers actually reach for.
//! Uses a compile-time perfect hash map (phf) so lookups cost nothing at
//! runtime and no mutable global state is needed.

use phf::phf_map;
use std::sync::LazyLock;

/// Entity name → replacement text.
static ENTITIES: phf::Map<&'static str, &'static str> = phf_map! {
    // Latin-1 supplement (U+00A0..U+00FF)
    "nbsp" => "\u{a0}",
    "iexcl" => "\u{a1}",
    "cent" => "\u{a2}",
    "pound" => "\u{a3}",
    "curren" => "\u{a4}",
    "yen" => "\u{a5}",
    "brvbar" => "\u{a6}",
    "sect" => "\u{a7}",
    "uml" => "\u{a8}",
    "copy" => "\u{a9}",
    "ordf" => "\u{aa}",
    "laquo" => "\u{ab}",
    "not" => "\u{ac}",
    "shy" => "\u{ad}",
    "reg" => "\u{ae}",
    "macr" => "\u{af}",
    "deg" => "\u{b0}",
    "plusmn" => "\u{b1}",
    "sup2" => "\u{b2}",
    "sup3" => "\u{b3}",
    "acute" => "\u{b4}",
    "micro" => "\u{b5}",
    "para" => "\u{b6}",
    "middot" => "\u{b7}",
    "cedil" => "\u{b8}",
    "sup1" => "\u{b9}",
    "ordm" => "\u{ba}",
    "raquo" => "\u{bb}",
    "frac14" => "\u{bc}",
    "frac12" => "\u{bd}",
    "frac34" => "\u{be}",
    "iquest" => "\u{bf}",
    "Agrave" => "\u{c0}",
    "Aacute" => "\u{c1}",
    "Acirc" => "\u{c2}",
    "Atilde" => "\u{c3}",
    "Auml" => "\u{c4}",
    "Aring" => "\u{c5}",
    "AElig" => "\u{c6}",
    "Ccedil" => "\u{c7}",
    "Egrave" => "\u{c8}",
    "Eacute" => "\u{c9}",
    "Ecirc" => "\u{ca}",
    "Euml" => "\u{cb}",
    "Igrave" => "\u{cc}",
    "Iacute" => "\u{cd}",
    "Icirc" => "\u{ce}",
    "Iuml" => "\u{cf}",
    "ETH" => "\u{d0}",
    "Ntilde" => "\u{d1}",
    "Ograve" => "\u{d2}",
    "Oacute" => "\u{d3}",
    "Ocirc" => "\u{d4}",
    "Otilde" => "\u{d5}",
    "Ouml" => "\u{d6}",
    "times" => "\u{d7}",
    "Oslash" => "\u{d8}",
    "Ugrave" => "\u{d9}",
    "Uacute" => "\u{da}",
    "Ucirc" => "\u{db}",
    "Uuml" => "\u{dc}",
    "Yacute" => "\u{dd}",
    "THORN" => "\u{de}",
    "szlig" => "\u{df}",
    "agrave" => "\u{e0}",
    "aacute" => "\u{e1}",
    "acirc" => "\u{e2}",
    "atilde" => "\u{e3}",
    "auml" => "\u{e4}",
    "aring" => "\u{e5}",
    "aelig" => "\u{e6}",
    "ccedil" => "\u{e7}",
    "egrave" => "\u{e8}",
    "eacute" => "\u{e9}",
    "ecirc" => "\u{ea}",
    "euml" => "\u{eb}",
    "igrave" => "\u{ec}",
    "iacute" => "\u{ed}",
    "icirc" => "\u{ee}",
    "iuml" => "\u{ef}",
    "eth" => "\u{f0}",
    "ntilde" => "\u{f1}",
    "ograve" => "\u{f2}",
    "oacute" => "\u{f3}",
    "ocirc" => "\u{f4}",
    "otilde" => "\u{f5}",
    "ouml" => "\u{f6}",
    "divide" => "\u{f7}",
    "oslash" => "\u{f8}",
    "ugrave" => "\u{f9}",
    "uacute" => "\u{fa}",
    "ucirc" => "\u{fb}",
    "uuml" => "\u{fc}",
    "yacute" => "\u{fd}",
    "thorn" => "\u{fe}",
    "yuml" => "\u{ff}",
    // Special characters
    "quot" => "\"",
    "amp" => "&",
    "lt" => "<",
    "gt" => ">",
    "apos" => "'",
    "OElig" => "\u{152}",
    "oelig" => "\u{153}",
    "Scaron" => "\u{160}",
    "scaron" => "\u{161}",
    "Yuml" => "\u{178}",
    "circ" => "\u{2c6}",
    "tilde" => "\u{2dc}",
    "ensp" => "\u{2002}",
    "emsp" => "\u{2003}",
    "thinsp" => "\u{2009}",
    "zwnj" => "\u{200c}",
    "zwj" => "\u{200d}",
    "lrm" => "\u{200e}",
    "rlm" => "\u{200f}",
    "ndash" => "\u{2013}",
    "mdash" => "\u{2014}",
    "lsquo" => "\u{2018}",
    "rsquo" => "\u{2019}",
    "sbquo" => "\u{201a}",
    "ldquo" => "\u{201c}",
    "rdquo" => "\u{201d}",
    "bdquo" => "\u{201e}",
    "dagger" => "\u{2020}",
    "Dagger" => "\u{2021}",
    "permil" => "\u{2030}",
    "lsaquo" => "\u{2039}",
    "rsaquo" => "\u{203a}",
    "euro" => "\u{20ac}",
    // Symbols (Greek letters, arrows, math, shapes)
    "fnof" => "\u{192}",
    "Alpha" => "\u{391}",
    "Beta" => "\u{392}",
    "Gamma" => "\u{393}",
    "Delta" => "\u{394}",
    "Epsilon" => "\u{395}",
    "Zeta" => "\u{396}",
    "Eta" => "\u{397}",
    "Theta" => "\u{398}",
    "Iota" => "\u{399}",
    "Kappa" => "\u{39a}",
    "Lambda" => "\u{39b}",
    "Mu" => "\u{39c}",
    "Nu" => "\u{39d}",
    "Xi" => "\u{39e}",
    "Omicron" => "\u{39f}",
    "Pi" => "\u{3a0}",
    "Rho" => "\u{3a1}",
    "Sigma" => "\u{3a3}",
    "Tau" => "\u{3a4}",
    "Upsilon" => "\u{3a5}",
    "Phi" => "\u{3a6}",
    "Chi" => "\u{3a7}",
    "Psi" => "\u{3a8}",
    "Omega" => "\u{3a9}",
    "alpha" => "\u{3b1}",
    "beta" => "\u{3b2}",
    "gamma" => "\u{3b3}",
    "delta" => "\u{3b4}",
    "epsilon" => "\u{3b5}",
    "zeta" => "\u{3b6}",
    "eta" => "\u{3b7}",
    "theta" => "\u{3b8}",
    "iota" => "\u{3b9}",
    "kappa" => "\u{3ba}",
    "lambda" => "\u{3bb}",
    "mu" => "\u{3bc}",
    "nu" => "\u{3bd}",
    "xi" => "\u{3be}",
    "omicron" => "\u{3bf}",
    "pi" => "\u{3c0}",
    "rho" => "\u{3c1}",
    "sigmaf" => "\u{3c2}",
    "sigma" => "\u{3c3}",
    "tau" => "\u{3c4}",
    "upsilon" => "\u{3c5}",
    "phi" => "\u{3c6}",
    "chi" => "\u{3c7}",
    "psi" => "\u{3c8}",
    "omega" => "\u{3c9}",
    "thetasym" => "\u{3d1}",
    "upsih" => "\u{3d2}",
    "piv" => "\u{3d6}",
    "bull" => "\u{2022}",
    "hellip" => "\u{2026}",
    "prime" => "\u{2032}",
    "Prime" => "\u{2033}",
    "oline" => "\u{203e}",
    "frasl" => "\u{2044}",
    "weierp" => "\u{2118}",
    "image" => "\u{2111}",
    "real" => "\u{211c}",
    "trade" => "\u{2122}",
    "alefsym" => "\u{2135}",
    "larr" => "\u{2190}",
    "uarr" => "\u{2191}",
    "rarr" => "\u{2192}",
    "darr" => "\u{2193}",
    "harr" => "\u{2194}",
    "crarr" => "\u{21b5}",
    "lArr" => "\u{21d0}",
    "uArr" => "\u{21d1}",
    "rArr" => "\u{21d2}",
    "dArr" => "\u{21d3}",
    "hArr" => "\u{21d4}",
    "forall" => "\u{2200}",
    "part" => "\u{2202}",
    "exist" => "\u{2203}",
    "empty" => "\u{2205}",
    "nabla" => "\u{2207}",
    "isin" => "\u{2208}",
    "notin" => "\u{2209}",
    "ni" => "\u{220b}",
    "prod" => "\u{220f}",
    "sum" => "\u{2211}",
    "minus" => "\u{2212}",
    "lowast" => "\u{2217}",
    "radic" => "\u{221a}",
    "prop" => "\u{221d}",
    "infin" => "\u{221e}",
    "ang" => "\u{2220}",
    "and" => "\u{2227}",
    "or" => "\u{2228}",
    "cap" => "\u{2229}",
    "cup" => "\u{222a}",
    "int" => "\u{222b}",
    "there4" => "\u{2234}",
    "sim" => "\u{223c}",
    "cong" => "\u{2245}",
    "asymp" => "\u{2248}",
    "ne" => "\u{2260}",
    "equiv" => "\u{2261}",
    "le" => "\u{2264}",
    "ge" => "\u{2265}",
    "sub" => "\u{2282}",
    "sup" => "\u{2283}",
    "nsub" => "\u{2284}",
    "sube" => "\u{2286}",
    "supe" => "\u{2287}",
    "oplus" => "\u{2295}",
    "otimes" => "\u{2297}",
    "perp" => "\u{22a5}",
    "sdot" => "\u{22c5}",
    "lceil" => "\u{2308}",
    "rceil" => "\u{2309}",
    "lfloor" => "\u{230a}",
    "rfloor" => "\u{230b}",
    "lang" => "\u{2329}",
    "rang" => "\u{232a}",
    "loz" => "\u{25ca}",
    "spades" => "\u{2660}",
    "clubs" => "\u{2663}",
    "hearts" => "\u{2665}",
    "diams" => "\u{2666}",
};

/// Look up the replacement text for a named character reference.
///
/// Returns `None` for names outside the table, letting callers fall back to
/// their own handling of user-defined entities.
pub fn resolve(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

/// The entity table rendered as a synthetic internal-subset DTD, ready to be
/// prepended to a markup stream.
///
/// Declarations are emitted in entity-name order so the rendered prefix is
/// byte-stable. Values whose character is `&` or `<` are declared with the
/// doubly escaped numeric form (`&#38;#38;`): the first expansion must yield
/// a character reference, not a raw markup delimiter.
pub static ENTITY_DTD: LazyLock<String> = LazyLock::new(render_dtd);

fn render_dtd() -> String {
    let mut entries: Vec<(&str, &str)> = ENTITIES
        .entries()
        .map(|(name, text)| (*name, *text))
        .collect();
    entries.sort_unstable_by_key(|(name, _)| *name);

    let mut dtd = String::with_capacity(entries.len() * 28);
    dtd.push_str("<!DOCTYPE component[");
    for (name, text) in entries {
        dtd.push_str("<!ENTITY ");
        dtd.push_str(name);
        dtd.push_str(" \"");
        for c in text.chars() {
            match c {
                '&' | '<' => dtd.push_str(&format!("&#38;#{};", c as u32)),
                _ => dtd.push_str(&format!("&#{};", c as u32)),
            }
        }
        dtd.push_str("\">");
    }
    dtd.push_str("]>\n");
    dtd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_names() {
        assert_eq!(resolve("nbsp"), Some("\u{a0}"));
        assert_eq!(resolve("copy"), Some("\u{a9}"));
        assert_eq!(resolve("mdash"), Some("\u{2014}"));
        assert_eq!(resolve("amp"), Some("&"));
        assert_eq!(resolve("lt"), Some("<"));
    }

    #[test]
    fn unknown_names_are_not_resolved() {
        assert_eq!(resolve("bogus"), None);
        assert_eq!(resolve("NBSP"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn dtd_declares_the_table() {
        let dtd = &*ENTITY_DTD;
        assert!(dtd.starts_with("<!DOCTYPE component["));
        assert!(dtd.ends_with("]>\n"));
        assert!(dtd.contains("<!ENTITY nbsp \"&#160;\">"));
        assert!(dtd.contains("<!ENTITY euro \"&#8364;\">"));
    }

    #[test]
    fn markup_delimiters_are_doubly_escaped() {
        let dtd = &*ENTITY_DTD;
        assert!(dtd.contains("<!ENTITY amp \"&#38;#38;\">"));
        assert!(dtd.contains("<!ENTITY lt \"&#38;#60;\">"));
        // `>` is harmless inside an entity value and stays a plain reference
        assert!(dtd.contains("<!ENTITY gt \"&#62;\">"));
    }

    #[test]
    fn dtd_rendering_is_stable() {
        assert_eq!(render_dtd(), render_dtd());
        assert_eq!(&render_dtd(), &*ENTITY_DTD);
    }
}
