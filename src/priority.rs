//! Prop priority classification.
//!
//! Every prop name maps to a `(class, rank)` pair. The class is the semantic
//! bucket (first props, a style group, unrecognized "other" props, last
//! props); the rank breaks ties inside one class. Classification is total:
//! any string lands somewhere, nothing ever fails.

use compact_str::CompactString;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// A named group of prop keys. Group order in [`PRIORITY_GROUPS`] defines the
/// class ranking; key order within a group defines the intra-class rank.
pub struct PriorityGroup {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

/// The fixed priority table.
///
/// Key order inside a group is meaningful: same-group props sort in this
/// listed order, not alphabetically, because physical layout reads better
/// before color, color before effects, and so on.
pub static PRIORITY_GROUPS: &[PriorityGroup] = &[
    PriorityGroup {
        name: "System",
        keys: &[
            "as",
            "component",
            "tag",
            "theme",
            "themeInverse",
            "untilMeasured",
            "testID",
            "sx",
            "layerStyle",
            "textStyle",
        ],
    },
    PriorityGroup {
        name: "Position",
        keys: &[
            "position", "pos", "zIndex", "zi", "top", "t", "right", "r", "bottom", "b", "left",
            "l", "inset",
        ],
    },
    PriorityGroup {
        name: "Flexbox",
        keys: &[
            "flex",
            "flexDirection",
            "flexWrap",
            "flexGrow",
            "flexShrink",
            "flexBasis",
            "alignItems",
            "alignContent",
            "alignSelf",
            "justifyContent",
            "gap",
            "rowGap",
            "columnGap",
        ],
    },
    PriorityGroup {
        name: "Grid",
        keys: &[
            "gridGap",
            "gridRowGap",
            "gridColumnGap",
            "gridColumn",
            "gridRow",
            "gridArea",
            "gridAutoFlow",
            "gridAutoRows",
            "gridAutoColumns",
            "gridTemplateRows",
            "gridTemplateColumns",
            "gridTemplateAreas",
        ],
    },
    PriorityGroup {
        name: "Layout",
        keys: &[
            "display",
            "w",
            "width",
            "h",
            "height",
            "minWidth",
            "miw",
            "maxWidth",
            "maw",
            "minHeight",
            "mih",
            "maxHeight",
            "mah",
            "overflow",
            "overflowX",
            "overflowY",
            "aspectRatio",
        ],
    },
    PriorityGroup {
        name: "Spacing",
        keys: &[
            "m",
            "margin",
            "mt",
            "marginTop",
            "mr",
            "marginRight",
            "mb",
            "marginBottom",
            "ml",
            "marginLeft",
            "mx",
            "marginHorizontal",
            "my",
            "marginVertical",
            "p",
            "padding",
            "pt",
            "paddingTop",
            "pr",
            "paddingRight",
            "pb",
            "paddingBottom",
            "pl",
            "paddingLeft",
            "px",
            "paddingHorizontal",
            "py",
            "paddingVertical",
            "space",
            "spaceDirection",
        ],
    },
    PriorityGroup {
        name: "Typography",
        keys: &[
            "color",
            "fontFamily",
            "ff",
            "fontSize",
            "fos",
            "fontStyle",
            "fontWeight",
            "fow",
            "letterSpacing",
            "ls",
            "lineHeight",
            "lh",
            "textAlign",
            "ta",
            "textTransform",
            "textDecorationLine",
            "wordWrap",
        ],
    },
    PriorityGroup {
        name: "Background",
        keys: &[
            "bg",
            "background",
            "backgroundColor",
            "backgroundImage",
            "backgroundSize",
            "backgroundPosition",
            "backgroundRepeat",
            "backgroundAttachment",
        ],
    },
    PriorityGroup {
        name: "Border",
        keys: &[
            "border",
            "borderWidth",
            "bw",
            "borderStyle",
            "borderColor",
            "bc",
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
            "borderTopColor",
            "borderRightColor",
            "borderBottomColor",
            "borderLeftColor",
        ],
    },
    PriorityGroup {
        name: "BorderRadius",
        keys: &[
            "borderRadius",
            "br",
            "borderTopLeftRadius",
            "borderTopRightRadius",
            "borderBottomLeftRadius",
            "borderBottomRightRadius",
        ],
    },
    PriorityGroup {
        name: "Effects",
        keys: &[
            "opacity",
            "o",
            "shadow",
            "boxShadow",
            "shadowColor",
            "shadowOffset",
            "shadowOpacity",
            "shadowRadius",
            "elevation",
        ],
    },
    PriorityGroup {
        name: "States",
        keys: &[
            "hoverStyle",
            "pressStyle",
            "focusStyle",
            "focusVisibleStyle",
            "disabledStyle",
            "enterStyle",
            "exitStyle",
            "_hover",
            "_active",
            "_focus",
            "_pressed",
            "_disabled",
        ],
    },
    PriorityGroup {
        name: "Events",
        keys: &[
            "onPress",
            "onPressIn",
            "onPressOut",
            "onLongPress",
            "onHoverIn",
            "onHoverOut",
            "onFocus",
            "onBlur",
            "onLayout",
            "onClick",
        ],
    },
    // The trailing style-misc group. `outline` closes the table: every key
    // here still sorts before unrecognized props.
    PriorityGroup {
        name: "StyleMisc",
        keys: &[
            "animation",
            "appearance",
            "transform",
            "transformOrigin",
            "visibility",
            "whiteSpace",
            "userSelect",
            "pointerEvents",
            "wordBreak",
            "overflowWrap",
            "textOverflow",
            "boxSizing",
            "cursor",
            "resize",
            "transition",
            "objectFit",
            "objectPosition",
            "float",
            "outline",
        ],
    },
];

/// Class reserved for props forced to the front via `first_props`
pub const CLASS_FIRST: u32 = 0;
/// Class for component-specific props when they sort before style props
pub const CLASS_COMPONENT_SPECIFIC: u32 = 1;
/// First class occupied by the priority table
const CLASS_TABLE_BASE: u32 = 2;
/// Class for component-specific props when the before-style flag is off.
/// Reserved slot; the flag is currently always true.
pub const CLASS_COMPONENT_SPECIFIC_LATE: u32 = CLASS_TABLE_BASE + PRIORITY_GROUPS.len() as u32;
/// Class for props the table does not know about
pub const CLASS_OTHER: u32 = CLASS_COMPONENT_SPECIFIC_LATE + 1;
/// Class for props forced to the end via `last_props`
pub const CLASS_LAST: u32 = u32::MAX;

/// Lazily built index over the table: name -> (class, rank)
static TABLE_INDEX: Lazy<FxHashMap<&'static str, (u32, u32)>> = Lazy::new(|| {
    let mut index = FxHashMap::default();
    for (group_idx, group) in PRIORITY_GROUPS.iter().enumerate() {
        for (key_idx, key) in group.keys.iter().enumerate() {
            index
                .entry(*key)
                .or_insert((CLASS_TABLE_BASE + group_idx as u32, key_idx as u32));
        }
    }
    index
});

/// Ordering configuration for one rule invocation.
///
/// Built once per invocation from the rule options and threaded explicitly
/// through classification and sorting; there is no hidden global state.
#[derive(Debug, Clone)]
pub struct PriorityConfig {
    first_props: Vec<CompactString>,
    last_props: Vec<CompactString>,
    /// Whether component-specific props sort before general style props.
    /// Always true today; the false branch is a reserved hook.
    comp_props_before_style_props: bool,
    component_specific_props: Option<Vec<CompactString>>,
}

impl PriorityConfig {
    /// Default names forced to the front of every prop list
    pub const DEFAULT_FIRST_PROPS: &'static [&'static str] = &["key", "ref"];

    /// Build a config, resolving `first_props`/`last_props` conflicts.
    ///
    /// A name present in both lists keeps only its `first_props` membership
    /// (first wins); this is a policy choice, not a validation failure.
    pub fn new(first_props: Vec<CompactString>, last_props: Vec<CompactString>) -> Self {
        let last_props = last_props
            .into_iter()
            .filter(|name| !first_props.contains(name))
            .collect();
        Self {
            first_props,
            last_props,
            comp_props_before_style_props: true,
            component_specific_props: None,
        }
    }

    pub fn first_props(&self) -> &[CompactString] {
        &self.first_props
    }

    pub fn last_props(&self) -> &[CompactString] {
        &self.last_props
    }
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_FIRST_PROPS
                .iter()
                .map(|s| CompactString::from(*s))
                .collect(),
            Vec::new(),
        )
    }
}

/// Where a prop name sorts: class first, then rank inside the class.
///
/// `rank` is `None` only for the "other" class, where callers fall back to
/// comparing the names themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropPriority {
    pub class: u32,
    pub rank: Option<u32>,
}

/// Classify a prop name under the given configuration. Total: every name
/// classifies to some class, unknown names never fail.
pub fn classify(name: &str, config: &PriorityConfig) -> PropPriority {
    if let Some(rank) = position_of(&config.first_props, name) {
        return PropPriority {
            class: CLASS_FIRST,
            rank: Some(rank),
        };
    }

    if let Some(rank) = position_of(&config.last_props, name) {
        return PropPriority {
            class: CLASS_LAST,
            rank: Some(rank),
        };
    }

    if let Some(specific) = &config.component_specific_props {
        if let Some(rank) = position_of(specific, name) {
            let class = if config.comp_props_before_style_props {
                CLASS_COMPONENT_SPECIFIC
            } else {
                CLASS_COMPONENT_SPECIFIC_LATE
            };
            return PropPriority {
                class,
                rank: Some(rank),
            };
        }
    }

    if let Some(&(class, rank)) = TABLE_INDEX.get(name) {
        return PropPriority {
            class,
            rank: Some(rank),
        };
    }

    PropPriority {
        class: CLASS_OTHER,
        rank: None,
    }
}

fn position_of(names: &[CompactString], name: &str) -> Option<u32> {
    names.iter().position(|n| n == name).map(|i| i as u32)
}
