/// Background and text color for one visual role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub background: &'static str,
    pub color: &'static str,
}

impl Swatch {
    /// Inline CSS declarations for this swatch.
    pub fn css(&self) -> String {
        format!("background: {}; color: {};", self.background, self.color)
    }
}

/// A named bundle of the four colored roles on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub name: &'static str,
    /// CSS `background` value for the card body.
    pub card: &'static str,
    pub avatar: Swatch,
    pub pill: Swatch,
    pub badge: Swatch,
}

const STONE_900: &str = "#1c1917";
const WHITE: &str = "#ffffff";
/// A brand color: hex for static themes, RGB for alpha blends in inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandColor {
    pub hex: &'static str,
    pub rgb: (u8, u8, u8),
}

pub const BRAND_PURPLE: BrandColor = BrandColor {
    hex: "#6a498e",
    rgb: (106, 73, 142),
};
pub const BRAND_GOLD: BrandColor = BrandColor {
    hex: "#f4bd1d",
    rgb: (244, 189, 29),
};

const fn swatch(background: &'static str, color: &'static str) -> Swatch {
    Swatch { background, color }
}

/// Theme for a Tailwind-like palette: pale card, dark avatar and badge, light pill.
const fn palette(
    name: &'static str,
    card: &'static str,
    dark: &'static str,
    light_text: &'static str,
    pill: &'static str,
) -> ColorTheme {
    ColorTheme {
        name,
        card,
        avatar: swatch(dark, light_text),
        pill: swatch(pill, STONE_900),
        badge: swatch(dark, light_text),
    }
}

static PURPLE: ColorTheme = ColorTheme {
    name: "purple",
    card: "linear-gradient(135deg, rgba(106,73,142,0.12), rgba(106,73,142,0.08), rgba(255,255,255,0.4))",
    avatar: swatch(BRAND_PURPLE.hex, WHITE),
    pill: swatch(BRAND_PURPLE.hex, WHITE),
    badge: swatch(BRAND_PURPLE.hex, WHITE),
};

static GOLD: ColorTheme = ColorTheme {
    name: "gold",
    card: "linear-gradient(135deg, rgba(244,189,29,0.18), rgba(244,189,29,0.10), rgba(255,255,255,0.4))",
    avatar: swatch(BRAND_GOLD.hex, STONE_900),
    pill: swatch(BRAND_GOLD.hex, STONE_900),
    badge: swatch(BRAND_GOLD.hex, STONE_900),
};

static ALPHA: ColorTheme = palette(
    "alpha",
    "linear-gradient(135deg, rgba(255,247,237,0.7), rgba(255,247,237,0.6), rgba(255,255,255,0.3))",
    "#7c2d12",
    "#ffedd5",
    "rgba(254,215,170,0.6)",
);

static GAMMA: ColorTheme = palette(
    "gamma",
    "linear-gradient(135deg, rgba(240,253,250,0.7), rgba(240,253,250,0.6), rgba(255,255,255,0.3))",
    "#134e4a",
    "#ccfbf1",
    "rgba(153,246,228,0.6)",
);

static DELTA: ColorTheme = palette(
    "delta",
    "linear-gradient(135deg, rgba(249,250,251,0.7), rgba(249,250,251,0.6), rgba(255,255,255,0.3))",
    "#111827",
    "#f3f4f6",
    "rgba(229,231,235,0.6)",
);

static EPSILON: ColorTheme = palette(
    "epsilon",
    "linear-gradient(135deg, rgba(255,251,235,0.7), rgba(255,251,235,0.6), rgba(255,255,255,0.3))",
    "#78350f",
    "#fef3c7",
    "rgba(253,230,138,0.6)",
);

static ZETA: ColorTheme = palette(
    "zeta",
    "linear-gradient(135deg, rgba(255,241,242,0.7), rgba(255,241,242,0.6), rgba(255,255,255,0.3))",
    "#881337",
    "#ffe4e6",
    "rgba(254,205,211,0.6)",
);

static ETA: ColorTheme = palette(
    "eta",
    "linear-gradient(135deg, rgba(239,246,255,0.7), rgba(239,246,255,0.6), rgba(255,255,255,0.3))",
    "#1e3a8a",
    "#dbeafe",
    "rgba(191,219,254,0.6)",
);

static THETA: ColorTheme = palette(
    "theta",
    "linear-gradient(135deg, rgba(240,253,244,0.7), rgba(240,253,244,0.6), rgba(255,255,255,0.3))",
    "#14532d",
    "#dcfce7",
    "rgba(187,247,208,0.6)",
);

static IOTA: ColorTheme = palette(
    "iota",
    "linear-gradient(135deg, rgba(253,242,248,0.7), rgba(253,242,248,0.6), rgba(255,255,255,0.3))",
    "#831843",
    "#fce7f3",
    "rgba(251,207,232,0.6)",
);

pub static DEFAULT_THEME: ColorTheme = ColorTheme {
    name: "default",
    card: "linear-gradient(135deg, rgba(250,250,249,0.7), rgba(250,250,249,0.6), rgba(255,255,255,0.3))",
    avatar: swatch(BRAND_PURPLE.hex, WHITE),
    pill: swatch(BRAND_GOLD.hex, STONE_900),
    badge: swatch(BRAND_PURPLE.hex, WHITE),
};

static PODIUM_FIRST: ColorTheme = ColorTheme {
    name: "podium-1",
    card: "linear-gradient(135deg, rgba(255,251,235,0.8), rgba(254,252,232,0.7), rgba(255,255,255,0.4))",
    avatar: swatch("#f59e0b", "#fffbeb"),
    pill: swatch("rgba(253,230,138,0.7)", STONE_900),
    badge: swatch("#d97706", "#fffbeb"),
};

static PODIUM_SECOND: ColorTheme = ColorTheme {
    name: "podium-2",
    card: "linear-gradient(135deg, rgba(250,250,250,0.8), rgba(249,250,251,0.7), rgba(255,255,255,0.5))",
    avatar: swatch("#71717a", "#fafafa"),
    pill: swatch("#d4d4d8", STONE_900),
    badge: swatch("#52525b", WHITE),
};

static PODIUM_THIRD: ColorTheme = ColorTheme {
    name: "podium-3",
    card: "linear-gradient(135deg, rgba(255,251,235,0.8), rgba(255,247,237,0.7), rgba(255,255,255,0.5))",
    avatar: swatch("#b45309", "#fffbeb"),
    pill: swatch("#fcd34d", STONE_900),
    badge: swatch("#b45309", "#fffbeb"),
};

/// Category tags with a registered theme. Anything else uses [`DEFAULT_THEME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Purple,
    Gold,
    Alpha,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Self::Purple,
        Self::Gold,
        Self::Alpha,
        Self::Gamma,
        Self::Delta,
        Self::Epsilon,
        Self::Zeta,
        Self::Eta,
        Self::Theta,
        Self::Iota,
    ];

    pub fn key(self) -> &'static str {
        self.theme().name
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn theme(self) -> &'static ColorTheme {
        match self {
            Self::Purple => &PURPLE,
            Self::Gold => &GOLD,
            Self::Alpha => &ALPHA,
            Self::Gamma => &GAMMA,
            Self::Delta => &DELTA,
            Self::Epsilon => &EPSILON,
            Self::Zeta => &ZETA,
            Self::Eta => &ETA,
            Self::Theta => &THETA,
            Self::Iota => &IOTA,
        }
    }
}

/// Top-three finish, overriding the category theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Podium {
    First,
    Second,
    Third,
}

impl Podium {
    pub fn from_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    pub fn rank(self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn medal(self) -> &'static str {
        match self {
            Self::First => "\u{1F947}",
            Self::Second => "\u{1F948}",
            Self::Third => "\u{1F949}",
        }
    }

    pub fn theme(self) -> &'static ColorTheme {
        match self {
            Self::First => &PODIUM_FIRST,
            Self::Second => &PODIUM_SECOND,
            Self::Third => &PODIUM_THIRD,
        }
    }
}

/// Theme for a card: a podium rank wins outright, then the category key,
/// then the default.
pub fn resolve_theme(category_key: &str, podium_rank: Option<u32>) -> &'static ColorTheme {
    if let Some(podium) = podium_rank.and_then(Podium::from_rank) {
        return podium.theme();
    }
    Category::from_key(category_key)
        .map(Category::theme)
        .unwrap_or(&DEFAULT_THEME)
}
