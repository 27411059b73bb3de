use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-defined tag grouping transactions, with a closed color/icon theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: ColorName,
    pub icon: IconName,
}

impl Category {
    pub fn new(name: impl Into<String>, color: ColorName, icon: IconName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
            icon,
        }
    }

    /// The category synthesized on first launch so the ledger is never empty.
    pub fn default_category() -> Self {
        Self::new("Default", ColorName::Gray, IconName::MusicNote)
    }
}

/// Fixed palette of 10 named colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColorName {
    Gray,
    Blue,
    Green,
    Indigo,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl ColorName {
    pub const ALL: [ColorName; 10] = [
        ColorName::Gray,
        ColorName::Blue,
        ColorName::Green,
        ColorName::Indigo,
        ColorName::Orange,
        ColorName::Pink,
        ColorName::Purple,
        ColorName::Red,
        ColorName::Teal,
        ColorName::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Gray => "Gray",
            ColorName::Blue => "Blue",
            ColorName::Green => "Green",
            ColorName::Indigo => "Indigo",
            ColorName::Orange => "Orange",
            ColorName::Pink => "Pink",
            ColorName::Purple => "Purple",
            ColorName::Red => "Red",
            ColorName::Teal => "Teal",
            ColorName::Yellow => "Yellow",
        }
    }

    /// Case-insensitive lookup used by the CLI.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
    }
}

/// Fixed set of 27 icon names, serialized with their original raw strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IconName {
    #[serde(rename = "pencil")]
    Pencil,
    #[serde(rename = "trash")]
    Trash,
    #[serde(rename = "paperplane")]
    Paperplane,
    #[serde(rename = "doc")]
    Doc,
    #[serde(rename = "calendar")]
    Calendar,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "rosette")]
    Rosette,
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "person.2")]
    PersonTwo,
    #[serde(rename = "globe")]
    Globe,
    #[serde(rename = "sparkles")]
    Sparkles,
    #[serde(rename = "keyboard")]
    Keyboard,
    #[serde(rename = "exclamationmark.triangle")]
    ExclamationmarkTriangle,
    #[serde(rename = "speaker.2")]
    SpeakerTwo,
    #[serde(rename = "music.note")]
    MusicNote,
    #[serde(rename = "heart")]
    Heart,
    #[serde(rename = "bolt")]
    Bolt,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "envelope")]
    Envelope,
    #[serde(rename = "bag")]
    Bag,
    #[serde(rename = "cart")]
    Cart,
    #[serde(rename = "house")]
    House,
    #[serde(rename = "tv")]
    Tv,
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "hare")]
    Hare,
    #[serde(rename = "sportscourt")]
    Sportscourt,
    #[serde(rename = "gamecontroller")]
    Gamecontroller,
}

impl IconName {
    pub const ALL: [IconName; 27] = [
        IconName::Pencil,
        IconName::Trash,
        IconName::Paperplane,
        IconName::Doc,
        IconName::Calendar,
        IconName::Book,
        IconName::Rosette,
        IconName::Person,
        IconName::PersonTwo,
        IconName::Globe,
        IconName::Sparkles,
        IconName::Keyboard,
        IconName::ExclamationmarkTriangle,
        IconName::SpeakerTwo,
        IconName::MusicNote,
        IconName::Heart,
        IconName::Bolt,
        IconName::Phone,
        IconName::Envelope,
        IconName::Bag,
        IconName::Cart,
        IconName::House,
        IconName::Tv,
        IconName::Car,
        IconName::Hare,
        IconName::Sportscourt,
        IconName::Gamecontroller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Pencil => "pencil",
            IconName::Trash => "trash",
            IconName::Paperplane => "paperplane",
            IconName::Doc => "doc",
            IconName::Calendar => "calendar",
            IconName::Book => "book",
            IconName::Rosette => "rosette",
            IconName::Person => "person",
            IconName::PersonTwo => "person.2",
            IconName::Globe => "globe",
            IconName::Sparkles => "sparkles",
            IconName::Keyboard => "keyboard",
            IconName::ExclamationmarkTriangle => "exclamationmark.triangle",
            IconName::SpeakerTwo => "speaker.2",
            IconName::MusicNote => "music.note",
            IconName::Heart => "heart",
            IconName::Bolt => "bolt",
            IconName::Phone => "phone",
            IconName::Envelope => "envelope",
            IconName::Bag => "bag",
            IconName::Cart => "cart",
            IconName::House => "house",
            IconName::Tv => "tv",
            IconName::Car => "car",
            IconName::Hare => "hare",
            IconName::Sportscourt => "sportscourt",
            IconName::Gamecontroller => "gamecontroller",
        }
    }

    /// Case-insensitive lookup used by the CLI.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(name))
    }
}
