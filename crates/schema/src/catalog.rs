//! Payload field tables for every block variant.

use crate::field::{FieldKind, FieldSpec};
use crate::kind::BlockKind;

const TEXT: FieldKind = FieldKind::Text { non_empty: false };
const NON_EMPTY: FieldKind = FieldKind::Text { non_empty: true };

const ALIGN: FieldKind = FieldKind::Choice(&["left", "center", "right"]);
const CROSS_ALIGN: FieldKind = FieldKind::Choice(&["start", "center", "end", "stretch"]);
const GAP: FieldKind = FieldKind::Choice(&["none", "sm", "md", "lg", "xl"]);
const SIZE: FieldKind = FieldKind::Choice(&["sm", "md", "lg"]);

const fn int(min: i64, max: i64) -> FieldKind {
    FieldKind::Integer {
        min: Some(min),
        max: Some(max),
    }
}

const fn req(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::required(name, kind)
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::optional(name, kind)
}

/// Name of the `columns-block` field declaring how many children it holds.
pub const COLUMN_COUNT_FIELD: &str = "count";

const HEADING: &[FieldSpec] = &[
    req("text", NON_EMPTY),
    req("level", FieldKind::Choice(&["h1", "h2", "h3", "h4", "h5", "h6"])),
    opt("align", ALIGN),
];

const TEXT_BLOCK: &[FieldSpec] = &[
    req("text", TEXT),
    opt("size", FieldKind::Choice(&["sm", "base", "lg", "xl"])),
    opt("align", ALIGN),
];

const BUTTON: &[FieldSpec] = &[
    req("label", NON_EMPTY),
    req("href", NON_EMPTY),
    opt(
        "variant",
        FieldKind::Choice(&["primary", "secondary", "outline", "ghost", "link"]),
    ),
    opt("size", SIZE),
    opt("openInNewTab", FieldKind::Boolean),
];

const IMAGE: &[FieldSpec] = &[
    req("src", NON_EMPTY),
    opt("alt", TEXT),
    opt("width", int(1, 10_000)),
    opt("height", int(1, 10_000)),
    opt("objectFit", FieldKind::Choice(&["cover", "contain", "fill"])),
    opt("caption", TEXT),
];

const CARD: &[FieldSpec] = &[
    req("title", NON_EMPTY),
    opt("description", TEXT),
    opt("imageSrc", TEXT),
    opt("href", TEXT),
    opt("variant", FieldKind::Choice(&["default", "bordered", "elevated"])),
];

const RICH_TEXT: &[FieldSpec] = &[req("content", TEXT)];

const VIDEO: &[FieldSpec] = &[
    req("src", NON_EMPTY),
    opt("provider", FieldKind::Choice(&["youtube", "vimeo", "file"])),
    opt("poster", TEXT),
    opt("autoplay", FieldKind::Boolean),
    opt("controls", FieldKind::Boolean),
    opt("loop", FieldKind::Boolean),
    opt("muted", FieldKind::Boolean),
];

const AUDIO: &[FieldSpec] = &[
    req("src", NON_EMPTY),
    opt("title", TEXT),
    opt("autoplay", FieldKind::Boolean),
    opt("controls", FieldKind::Boolean),
    opt("loop", FieldKind::Boolean),
];

const LIST: &[FieldSpec] = &[
    req("items", FieldKind::List { min_items: 0 }),
    opt("ordered", FieldKind::Boolean),
    opt("style", FieldKind::Choice(&["disc", "decimal", "check", "none"])),
];

const QUOTE: &[FieldSpec] = &[
    req("text", NON_EMPTY),
    opt("author", TEXT),
    opt("citation", TEXT),
];

const DIVIDER: &[FieldSpec] = &[
    opt("style", FieldKind::Choice(&["solid", "dashed", "dotted"])),
    opt("thickness", int(1, 16)),
    opt("color", TEXT),
];

const SPACER: &[FieldSpec] = &[req("height", int(0, 1_000))];

const ACCORDION: &[FieldSpec] = &[
    req("items", FieldKind::List { min_items: 1 }),
    opt("allowMultiple", FieldKind::Boolean),
    opt("defaultOpen", int(0, 100)),
];

const TABS: &[FieldSpec] = &[
    req("items", FieldKind::List { min_items: 1 }),
    opt("defaultTab", int(0, 100)),
    opt("orientation", FieldKind::Choice(&["horizontal", "vertical"])),
];

const EMBED: &[FieldSpec] = &[
    req("url", NON_EMPTY),
    opt("title", TEXT),
    opt("aspectRatio", FieldKind::Choice(&["16:9", "4:3", "1:1", "21:9"])),
];

const ICON: &[FieldSpec] = &[
    req("name", NON_EMPTY),
    opt("size", int(8, 256)),
    opt("color", TEXT),
    opt("label", TEXT),
];

const STATS: &[FieldSpec] = &[
    req("items", FieldKind::List { min_items: 1 }),
    opt("columns", int(1, 6)),
];

const MAP: &[FieldSpec] = &[
    req("address", NON_EMPTY),
    opt("latitude", FieldKind::Number),
    opt("longitude", FieldKind::Number),
    opt("zoom", int(1, 20)),
    opt("height", int(100, 2_000)),
];

const LOGO: &[FieldSpec] = &[
    req("src", NON_EMPTY),
    opt("alt", TEXT),
    opt("href", TEXT),
    opt("height", int(8, 512)),
];

const GRID: &[FieldSpec] = &[
    req("columns", int(1, 12)),
    opt("gap", GAP),
    opt("responsive", FieldKind::Boolean),
];

const FLEX: &[FieldSpec] = &[
    opt("direction", FieldKind::Choice(&["row", "column"])),
    opt(
        "justify",
        FieldKind::Choice(&["start", "center", "end", "between", "around", "evenly"]),
    ),
    opt("align", CROSS_ALIGN),
    opt("wrap", FieldKind::Boolean),
    opt("gap", GAP),
];

const STACK: &[FieldSpec] = &[opt("gap", GAP), opt("align", CROSS_ALIGN)];

const CONTAINER: &[FieldSpec] = &[
    opt("maxWidth", FieldKind::Choice(&["sm", "md", "lg", "xl", "full"])),
    opt("padding", GAP),
    opt("background", TEXT),
];

const COLUMNS: &[FieldSpec] = &[
    req(COLUMN_COUNT_FIELD, int(2, 3)),
    opt("gap", GAP),
    opt("stackOnMobile", FieldKind::Boolean),
];

impl BlockKind {
    /// The payload field table for this variant.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            BlockKind::Heading => HEADING,
            BlockKind::Text => TEXT_BLOCK,
            BlockKind::Button => BUTTON,
            BlockKind::Image => IMAGE,
            BlockKind::Card => CARD,
            BlockKind::RichText => RICH_TEXT,
            BlockKind::Video => VIDEO,
            BlockKind::Audio => AUDIO,
            BlockKind::List => LIST,
            BlockKind::Quote => QUOTE,
            BlockKind::Divider => DIVIDER,
            BlockKind::Spacer => SPACER,
            BlockKind::Accordion => ACCORDION,
            BlockKind::Tabs => TABS,
            BlockKind::Embed => EMBED,
            BlockKind::Icon => ICON,
            BlockKind::Stats => STATS,
            BlockKind::Map => MAP,
            BlockKind::Logo => LOGO,
            BlockKind::Grid => GRID,
            BlockKind::Flex => FLEX,
            BlockKind::Stack => STACK,
            BlockKind::Container => CONTAINER,
            BlockKind::Columns => COLUMNS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }
}
