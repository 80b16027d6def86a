//! Shorthand/long-form prop name dictionary.
//!
//! Built once from configuration (or the compiled-in Tamagui defaults) and
//! never mutated. The config artifact maps short names to long names; the
//! reverse map is derived here. If two short names point at the same long
//! name, the first one encountered wins, so lookups stay deterministic even
//! when the input is not strictly bijective.

use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// The standard Tamagui shorthand table, used when no project config
/// provides one. Mirrors `@tamagui/shorthands`.
pub static DEFAULT_SHORTHANDS: &[(&str, &str)] = &[
    ("bg", "backgroundColor"),
    ("m", "margin"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mx", "marginHorizontal"),
    ("my", "marginVertical"),
    ("p", "padding"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("px", "paddingHorizontal"),
    ("py", "paddingVertical"),
    ("w", "width"),
    ("h", "height"),
    ("miw", "minWidth"),
    ("mih", "minHeight"),
    ("maw", "maxWidth"),
    ("mah", "maxHeight"),
    ("br", "borderRadius"),
    ("bw", "borderWidth"),
    ("bc", "borderColor"),
    ("f", "flex"),
    ("fd", "flexDirection"),
    ("fw", "flexWrap"),
    ("fg", "flexGrow"),
    ("fs", "flexShrink"),
    ("fb", "flexBasis"),
    ("ai", "alignItems"),
    ("ac", "alignContent"),
    ("als", "alignSelf"),
    ("jc", "justifyContent"),
    ("ta", "textAlign"),
    ("ff", "fontFamily"),
    ("fos", "fontSize"),
    ("fow", "fontWeight"),
    ("ls", "letterSpacing"),
    ("lh", "lineHeight"),
    ("o", "opacity"),
    ("ov", "overflow"),
    ("pos", "position"),
    ("t", "top"),
    ("r", "right"),
    ("b", "bottom"),
    ("l", "left"),
    ("zi", "zIndex"),
];

/// Forward (long -> short) and reverse (short -> long) lookup, derived once.
#[derive(Debug, Clone, Default)]
pub struct ShorthandDictionary {
    to_long: FxHashMap<CompactString, CompactString>,
    to_short: FxHashMap<CompactString, CompactString>,
}

impl ShorthandDictionary {
    /// Build from `(short, long)` pairs in insertion order; first wins on
    /// either side of a collision.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut to_long: FxHashMap<CompactString, CompactString> = FxHashMap::default();
        let mut to_short: FxHashMap<CompactString, CompactString> = FxHashMap::default();

        for (short, long) in pairs {
            if to_long.contains_key(short) || to_short.contains_key(long) {
                continue;
            }
            to_long.insert(CompactString::from(short), CompactString::from(long));
            to_short.insert(CompactString::from(long), CompactString::from(short));
        }

        Self { to_long, to_short }
    }

    /// The compiled-in Tamagui dictionary
    pub fn tamagui_defaults() -> Self {
        Self::from_pairs(DEFAULT_SHORTHANDS.iter().copied())
    }

    /// The shorthand to use for `name`, or `None` when the name has no
    /// shorthand or already is one.
    pub fn shorthand_of(&self, name: &str) -> Option<&str> {
        if self.to_long.contains_key(name) {
            return None;
        }
        self.to_short.get(name).map(CompactString::as_str)
    }

    /// The long form to use for `name`, or `None` when the name has no long
    /// form or already is one.
    pub fn longhand_of(&self, name: &str) -> Option<&str> {
        if self.to_short.contains_key(name) {
            return None;
        }
        self.to_long.get(name).map(CompactString::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.to_long.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_long.len()
    }
}
