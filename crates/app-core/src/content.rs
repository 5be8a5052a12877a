//! Static travel catalog: locations, phrases, videos and the globe layout.
//!
//! Everything here is `'static` data. Frontends render it; nothing in this
//! module mutates. Lookups go through an FNV index built on first use.

use crate::constants::{GLOBE_RADIUS, MARKER_ALTITUDE};
use crate::routes::Route;
use fnv::FnvHashMap;
use std::sync::OnceLock;

/// Anchor for the Thailand flag marker.
pub const THAILAND_LAT_DEG: f32 = 13.0;
pub const THAILAND_LON_DEG: f32 = 101.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Architecture,
    Museums,
    Community,
    Nature,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Architecture => "Architecture",
            Category::Museums => "Museums",
            Category::Community => "Community",
            Category::Nature => "Nature",
        }
    }
}

/// Note shown by the on-page guide character.
#[derive(Debug, Clone, Copy)]
pub struct GuideNote {
    pub message: &'static str,
    /// Position on screen, percent of viewport width/height.
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub category: Category,
    pub rating: f32,
    /// Pin position on the Thailand map, percent of the map image.
    pub map_pos: [f32; 2],
    pub description: &'static str,
    pub history: &'static str,
    pub tips: &'static str,
    pub guide: GuideNote,
    /// Id of the next stop on the tour loop.
    pub next: &'static str,
    pub music: &'static str,
    pub backdrop: &'static str,
}

pub static LOCATIONS: [Location; 4] = [
    Location {
        id: "doi-suthep",
        name: "Wat Phra That Doi Suthep Ratchaworawihan",
        city: "Chiang Mai",
        category: Category::Architecture,
        rating: 4.7,
        map_pos: [40.0, 15.0],
        description: "A stunning Buddhist temple perched on Doi Suthep mountain, offering breathtaking views of Chiang Mai city.",
        history: "Built in 1383, this sacred temple is one of northern Thailand's most revered Buddhist sites. Legend tells of a white elephant carrying a Buddha relic that chose this spot by trumpeting three times and dying.",
        tips: "Visit early morning to avoid crowds. Climb the 309 steps or take the cable car. Dress modestly - shoulders and knees covered.",
        guide: GuideNote {
            message: "Welcome to Doi Suthep! Did you know the golden chedi contains sacred relics of Buddha? The temple glows magnificently at sunset!",
            pos: [60.0, 40.0],
        },
        next: "natural-history",
        music: "/assets/music/Sunset at Wat Phra That Doi Suthep (Instrumental).mp3",
        backdrop: "/assets/watt2.PNG",
    },
    Location {
        id: "natural-history",
        name: "Natural History Museum, AP.S.T., Khon Kaen University",
        city: "Khon Kaen",
        category: Category::Museums,
        rating: 4.5,
        map_pos: [58.0, 29.0],
        description: "A fascinating museum showcasing Thailand's natural heritage, with impressive dinosaur fossils and geological exhibits.",
        history: "Established to preserve and display the rich paleontological discoveries from northeastern Thailand, including the famous Phu Wiang dinosaur fossils.",
        tips: "Allow 2-3 hours for your visit. Photography is allowed in most areas. Great for families with children.",
        guide: GuideNote {
            message: "Hello explorer! This region was once home to dinosaurs millions of years ago. The fossils you see here tell stories of ancient Thailand!",
            pos: [70.0, 40.0],
        },
        next: "yaowarat",
        music: "/assets/music/museam music.mp3",
        backdrop: "/assets/museum.png",
    },
    Location {
        id: "yaowarat",
        name: "Yaowarat Walking Street",
        city: "Bangkok",
        category: Category::Community,
        rating: 4.6,
        map_pos: [47.0, 43.0],
        description: "Bangkok's vibrant Chinatown, famous for its incredible street food, gold shops, and bustling atmosphere.",
        history: "Established in 1891 during King Rama V's reign, Yaowarat has been the heart of Bangkok's Chinese community for over 130 years.",
        tips: "Best visited in the evening when the street food stalls open. Try the famous pad thai and mango sticky rice. Bring cash!",
        guide: GuideNote {
            message: "Sawatdee! Welcome to the heart of Bangkok's Chinatown! The best time to explore is after sunset when the food vendors set up. Try everything!",
            pos: [30.0, 60.0],
        },
        next: "lamai-beach",
        music: "/assets/music/Yaowarat Neon Night (10s energetic intro).mp3",
        backdrop: "/assets/yaowarat.PNG",
    },
    Location {
        id: "lamai-beach",
        name: "Lamai Beach, Koh Samui",
        city: "Surat Thani",
        category: Category::Nature,
        rating: 4.3,
        map_pos: [43.0, 70.0],
        description: "A beautiful sandy beach on Koh Samui island, perfect for swimming, sunbathing, and water sports.",
        history: "Lamai Beach is Koh Samui's second-largest beach, known for its laid-back atmosphere and the famous Hin Ta and Hin Yai rock formations.",
        tips: "Visit the rock formations at low tide. Many beachfront restaurants offer fresh seafood. Rent a scooter to explore nearby waterfalls.",
        guide: GuideNote {
            message: "Paradise found! The crystal-clear waters here are perfect for swimming. Don't miss the sunset - it's absolutely magical!",
            pos: [70.0, 75.0],
        },
        next: "doi-suthep",
        music: "/assets/music/Lamai Beach Sunset with Birds.mp3",
        backdrop: "/assets/beach2.PNG",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Phrase {
    pub title: &'static str,
    pub thai: &'static str,
    pub pronunciation: &'static str,
}

pub static PHRASES: [Phrase; 8] = [
    Phrase {
        title: "How to say hello in Thai language",
        thai: "Sawadee / สวัสดี",
        pronunciation: "(sa-wa-dee)",
    },
    Phrase {
        title: "How to say thank you",
        thai: "Khop khun / ขอบคุณ",
        pronunciation: "(kop-koon)",
    },
    Phrase {
        title: "How to say goodbye",
        thai: "La gon / ลาก่อน",
        pronunciation: "(laa-gon)",
    },
    Phrase {
        title: "How to say I love Thailand",
        thai: "Chan rak muang thai / ฉันรักเมืองไทย",
        pronunciation: "(chan-rak-mueang-thai)",
    },
    Phrase {
        title: "How to say delicious",
        thai: "Aroi / อร่อย",
        pronunciation: "(a-roi)",
    },
    Phrase {
        title: "How to say beautiful",
        thai: "Suay / สวย",
        pronunciation: "(suay)",
    },
    Phrase {
        title: "How to say yes",
        thai: "Chai / ใช่",
        pronunciation: "(chai)",
    },
    Phrase {
        title: "How to say no",
        thai: "Mai chai / ไม่ใช่",
        pronunciation: "(mai-chai)",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub static VIDEOS: [Video; 3] = [
    Video {
        id: "hbcGx4MGUMg",
        title: "Thailand Culture & Traditions",
        url: "https://www.youtube.com/embed/hbcGx4MGUMg",
    },
    Video {
        id: "T1oayo4IRpE",
        title: "Explore Beautiful Thailand",
        url: "https://www.youtube.com/embed/T1oayo4IRpE",
    },
    Video {
        id: "KsqaNkv57io",
        title: "Amazing Thailand Experience",
        url: "https://www.youtube.com/embed/KsqaNkv57io",
    },
];

fn location_index() -> &'static FnvHashMap<&'static str, &'static Location> {
    static INDEX: OnceLock<FnvHashMap<&'static str, &'static Location>> = OnceLock::new();
    INDEX.get_or_init(|| LOCATIONS.iter().map(|loc| (loc.id, loc)).collect())
}

/// Look up a location by id.
pub fn location(id: &str) -> Option<&'static Location> {
    location_index().get(id).copied()
}

/// The stop after `id` on the tour loop, if `id` is known.
pub fn next_location(id: &str) -> Option<&'static Location> {
    location(id).and_then(|loc| location(loc.next))
}

// ---------------- Flag decal ----------------

#[derive(Debug, Clone, Copy)]
pub struct Stripe {
    pub offset_y: f32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub size: [f32; 2],
    pub offset_y: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Layout of a flag decal in marker-local units, `+Z` out of the surface.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub stripe_size: [f32; 2],
    /// Lift along local `+Z` keeping stripes clear of the glow plane.
    pub stripe_lift: f32,
    pub stripes: &'static [Stripe],
    pub glow: Glow,
}

const THAI_RED: [f32; 3] = [0.929, 0.110, 0.141]; // #ED1C24
const THAI_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const THAI_BLUE: [f32; 3] = [0.141, 0.118, 0.306]; // #241E4E
const GLOW_GOLD: [f32; 3] = [1.0, 0.843, 0.0]; // #FFD700

pub static THAI_FLAG: FlagSpec = FlagSpec {
    stripe_size: [0.4, 0.1],
    stripe_lift: 0.01,
    stripes: &[
        Stripe { offset_y: 0.15, color: THAI_RED },
        Stripe { offset_y: 0.05, color: THAI_WHITE },
        Stripe { offset_y: -0.05, color: THAI_BLUE },
        Stripe { offset_y: -0.15, color: THAI_WHITE },
        Stripe { offset_y: -0.25, color: THAI_RED },
    ],
    glow: Glow {
        size: [0.5, 0.6],
        offset_y: -0.05,
        color: GLOW_GOLD,
        alpha: 0.3,
    },
};

// ---------------- Globe layout ----------------

#[derive(Debug, Clone, Copy)]
pub struct MarkerConfig {
    pub lat_deg: f32,
    pub lon_deg: f32,
    pub altitude: f32,
    pub route: Route,
    /// Hovering the bare globe also lights this marker up.
    pub highlight_on_globe_hover: bool,
    pub flag: &'static FlagSpec,
}

#[derive(Debug, Clone)]
pub struct GlobeConfig {
    pub sphere_radius: f32,
    pub sphere_route: Route,
    pub markers: Vec<MarkerConfig>,
}

/// The scene layout for the landing globe: one flag over Thailand, and the
/// globe itself routing to the same page.
pub fn globe_config() -> GlobeConfig {
    GlobeConfig {
        sphere_radius: GLOBE_RADIUS,
        sphere_route: Route::Thailand,
        markers: vec![MarkerConfig {
            lat_deg: THAILAND_LAT_DEG,
            lon_deg: THAILAND_LON_DEG,
            altitude: MARKER_ALTITUDE,
            route: Route::Thailand,
            highlight_on_globe_hover: true,
            flag: &THAI_FLAG,
        }],
    }
}
