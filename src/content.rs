//! Static page content. Everything here is fixed at build time.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub source: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartnerEntry {
    pub link_url: &'static str,
    pub alt: &'static str,
    pub logo_source: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeatureIcon {
    Award,
    Palette,
    Clock,
    Shield,
}

impl FeatureIcon {
    /// Inline SVG path data (24x24 viewbox, stroked).
    pub fn path(self) -> &'static str {
        match self {
            FeatureIcon::Award => "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM8.2 13.9 7 23l5-3 5 3-1.2-9.1",
            FeatureIcon::Palette => "M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-2a2 2 0 0 0-1.5 3.3A1.6 1.6 0 0 1 12 22zM7.5 10.5h.01M12 7.5h.01M16.5 10.5h.01",
            FeatureIcon::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
            FeatureIcon::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub url: &'static str,
    pub icon: &'static str,
    pub alt: &'static str,
    pub label: &'static str,
}

pub const HERO_IMAGE: GalleryImage = GalleryImage {
    source: "/k-1.webp",
    alt: "Nowoczesna czarna kuchnia z marmurowym blatem i złotym wykończeniem wyspy kuchennej, widok z przodu na trzy białe krzesła barowe.",
    width: 1920,
    height: 1080,
};

pub const ABOUT_IMAGE: GalleryImage = GalleryImage {
    source: "/k-2.webp",
    alt: "Ten sam projekt kuchni w czerni i złocie, ujęcie z boku pokazujące wyspę kuchenną",
    width: 1920,
    height: 1080,
};

pub const ABOUT_PARAGRAPH: &str = "Profesjonalne meble kuchenne na miarę Twoich marzeń. Tworzymy eleganckie, trwałe i funkcjonalne kuchnie z pasją i precyzją.";

pub const GALLERY_IMAGES: [GalleryImage; 4] = [
    GalleryImage {
        source: "/k-3.webp",
        alt: "Elegancka kuchnia na wymiar w szarości - Dark Oak Toruń, premium meble kuchenne z marmurowym blatem i zielonymi krzesłami barowymi",
        width: 1920,
        height: 1080,
    },
    GalleryImage {
        source: "/k-4.webp",
        alt: "Nowoczesna zabudowa kuchenna na wymiar - projekt Dark Oak Toruń, szare fronty z marmurem i złotym oświetleniem",
        width: 1920,
        height: 1080,
    },
    GalleryImage {
        source: "/k-5.webp",
        alt: "Luksusowa kuchnia premium z drewnianą zabudową - meble kuchenne na wymiar Dark Oak Toruń, marmurowy blat i czarne hokery",
        width: 1920,
        height: 1080,
    },
    GalleryImage {
        source: "/k-6.webp",
        alt: "Drewniana kuchnia na wymiar z wyspą - studio kuchenne Dark Oak Toruń, zabudowa z marmurowym blatem i designerskim oświetleniem",
        width: 1920,
        height: 1080,
    },
];

pub const PARTNERS: [PartnerEntry; 7] = [
    PartnerEntry {
        link_url: "https://www.egger.com/pl/?country=PL",
        alt: "Egger",
        logo_source: "https://cdn.egger.com/img/cms/ff58d5b2-cb11-41dc-ba72-5cec737f1c8a/a6b3c90f-a0ba-4379-abab-9215f9071955/ORIGINAL/gen_egger_logo_en.svg",
        description: "Płyty meblowe i blaty",
    },
    PartnerEntry {
        link_url: "https://www.blum.com/pl/pl/",
        alt: "Blum",
        logo_source: "https://www.blum.com/corporate/layout/facelift/images/ci/logo.svg.svg",
        description: "Okucia i systemy szuflad",
    },
    PartnerEntry {
        link_url: "https://www.swisskrono.com/pl-pl/",
        alt: "Swiss Krono",
        logo_source: "https://www.swisskrono.com/assets/img/swiss-krono-logo.svg",
        description: "Płyty drewnopochodne",
    },
    PartnerEntry {
        link_url: "https://www.dobryfront.pl/",
        alt: "Dobry Front",
        logo_source: "https://www.dobryfront.pl/wp-content/uploads/2025/08/logo_mottoa.jpg",
        description: "Fronty meblowe",
    },
    PartnerEntry {
        link_url: "https://www.pfleiderer.com/pl-pl/",
        alt: "Pfleiderer",
        logo_source: "https://www.pfleiderer.com/_static/media/pfleiderer-logo.svg",
        description: "Laminaty i płyty",
    },
    PartnerEntry {
        link_url: "https://kronospan.com/pl_PL/",
        alt: "Kronospan",
        logo_source: "https://kronospan.com/public/images/logo.svg",
        description: "Materiały drewnopochodne",
    },
    PartnerEntry {
        link_url: "https://www.abler.pl/",
        alt: "Abler",
        logo_source: "https://www.abler.pl/themes/custom/abler/logo.png",
        description: "Akcesoria kuchenne",
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Award,
        title: "Najwyższa Jakość",
        description: "Współpracujemy wyłącznie z najlepszymi producentami mebli w Europie. Każdy projekt to gwarancja trwałości i elegancji.",
    },
    Feature {
        icon: FeatureIcon::Palette,
        title: "Indywidualny Design",
        description: "Projektujemy kuchnie na wymiar, dopasowane do Twojego stylu życia. Od nowoczesnego minimalizmu po klasyczną elegancję.",
    },
    Feature {
        icon: FeatureIcon::Clock,
        title: "Profesjonalizm",
        description: "Dotrzymujemy terminów i budżetu. Kompleksowa obsługa od projektu po montaż z dbałością o każdy szczegół.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Gwarancja Zadowolenia",
        description: "Wieloletnie doświadczenie i setki zadowolonych klientów w Toruniu. Twoja satysfakcja to nasz priorytet.",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        url: "https://www.instagram.com/darkoak7/",
        icon: "/instagram-icon.svg",
        alt: "Instagram Dark Oak",
        label: "Odwiedź profil Instagram Dark Oak - kuchnie na wymiar Toruń",
    },
    SocialLink {
        url: "https://www.tiktok.com/@dark.oak.home.meb",
        icon: "/tiktok-icon.svg",
        alt: "TikTok Dark Oak",
        label: "Zobacz filmy Dark Oak na TikTok - realizacje kuchni na wymiar",
    },
    SocialLink {
        url: "https://www.facebook.com/profile.php?id=61582880040440",
        icon: "/facebook-icon.svg",
        alt: "Facebook Dark Oak",
        label: "Polub stronę Facebook Dark Oak - studio kuchenne Toruń",
    },
];

/// The marquee strip: the partner list twice in a row, so translating by -50% loops seamlessly.
pub fn partner_loop() -> Vec<PartnerEntry> {
    PARTNERS.iter().chain(PARTNERS.iter()).copied().collect()
}

/// Splits text into alternating runs of non-whitespace and whitespace.
/// Concatenating the result gives back the input.
pub fn split_words(input: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in input.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                runs.push(&input[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < input.len() {
        runs.push(&input[start..]);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_alternates_runs_and_keeps_every_char() {
        let runs = split_words("Tworzymy  eleganckie, trwałe");
        assert_eq!(runs, vec!["Tworzymy", "  ", "eleganckie,", " ", "trwałe"]);
        assert_eq!(runs.concat(), "Tworzymy  eleganckie, trwałe");
    }

    #[test]
    fn split_words_handles_edges() {
        assert!(split_words("").is_empty());
        assert_eq!(split_words(" a "), vec![" ", "a", " "]);
        assert_eq!(split_words(ABOUT_PARAGRAPH).concat(), ABOUT_PARAGRAPH);
    }

    #[test]
    fn partner_loop_repeats_the_list_once() {
        let strip = partner_loop();
        assert_eq!(strip.len(), PARTNERS.len() * 2);
        assert_eq!(&strip[..PARTNERS.len()], &PARTNERS[..]);
        assert_eq!(&strip[PARTNERS.len()..], &PARTNERS[..]);
    }

    #[test]
    fn gallery_images_are_declared() {
        assert!(!GALLERY_IMAGES.is_empty());
        assert!(GALLERY_IMAGES.iter().all(|img| !img.alt.is_empty() && img.width > 0));
    }
}
