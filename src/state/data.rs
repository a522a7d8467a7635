/// Shared data structures for the application state
///
/// These structs represent the static reference data that the
/// pages render. Nothing here is mutated at runtime.

/// Aspect-ratio category of a work item.
///
/// Also names the two sections of the Works page, since each
/// orientation has its own fixed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// 9:16 shorts and reels
    Vertical,
    /// 16:9 cinematic films
    Horizontal,
}

impl Orientation {
    /// Section heading shown above the gallery grid
    pub fn heading(self) -> &'static str {
        match self {
            Orientation::Vertical => "Shorts & Reels",
            Orientation::Horizontal => "Cinematic Films",
        }
    }
}

/// Represents a single piece of work in the portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    /// Unique, stable identifier
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub client: &'static str,
    pub year: &'static str,
    /// Remote location of the clip, unread until cards play real video
    pub media: &'static str,
    pub orientation: Orientation,
}

/// A product on the (decorative) Store page
#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    /// Remote location of the product shot
    pub image: &'static str,
    /// Print dimensions in inches, merch has none
    pub size: Option<&'static str>,
}

/// The two fixed, ordered work sequences
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub vertical: &'static [WorkItem],
    pub horizontal: &'static [WorkItem],
}

impl Catalog {
    /// The portfolio shipped with the app
    pub fn portfolio() -> Self {
        Catalog {
            vertical: VERTICAL_WORKS,
            horizontal: HORIZONTAL_WORKS,
        }
    }

    /// The sequence for one section
    pub fn section(&self, orientation: Orientation) -> &'static [WorkItem] {
        match orientation {
            Orientation::Vertical => self.vertical,
            Orientation::Horizontal => self.horizontal,
        }
    }
}

static VERTICAL_WORKS: &[WorkItem] = &[
    WorkItem {
        id: 101,
        title: "Drift State",
        category: "Automotive",
        client: "Personal",
        year: "2024",
        media: "https://www.dropbox.com/scl/fi/opah137bqtjtg4gb0kboq/drifting.mp4?rlkey=swzdq9ktnrgyw19ypehiif5qt&st=dbwsvnt5&raw=1",
        orientation: Orientation::Vertical,
    },
    WorkItem {
        id: 102,
        title: "Golden Horizon",
        category: "Travel",
        client: "Explore",
        year: "2024",
        media: "https://www.dropbox.com/scl/fi/x9evw26r2tb2gad8xgdc3/one-of-the-best-sunsets-I-ve-ever-seen-1.mp4?rlkey=lrfx2usxs0q3enpkuu8j0yp45&st=dzu6xf1r&raw=1",
        orientation: Orientation::Vertical,
    },
    WorkItem {
        id: 103,
        title: "Spring Awakening",
        category: "Nature",
        client: "Season",
        year: "2023",
        media: "https://www.dropbox.com/scl/fi/1z2ekv7ryjusshq00r6r9/spring-has-finally-come-around-in-Aus.mp4?rlkey=rixpg341bipzjbtbwq23pvzmq&st=vzpziorp&raw=1",
        orientation: Orientation::Vertical,
    },
    WorkItem {
        id: 104,
        title: "Into the Wild",
        category: "Lifestyle",
        client: "Camp",
        year: "2024",
        media: "https://www.dropbox.com/scl/fi/4ikzitd8c2dyc30d6ksee/one-hell-of-a-camp-spot.mp4?rlkey=iwdbpto7b36x849v7v45ukg6e&st=do5mcpxw&raw=1",
        orientation: Orientation::Vertical,
    },
];

static HORIZONTAL_WORKS: &[WorkItem] = &[
    WorkItem {
        id: 201,
        title: "Urban Flow",
        category: "Cinematography",
        client: "Concept",
        year: "2024",
        media: "https://www.dropbox.com/scl/fi/07gehbamxu1153uwfzu3e/home-.-horizontal.mp4?rlkey=p7lqi0wglmiwsxgy1wy64jbrq&st=g5vajvz6&raw=1",
        orientation: Orientation::Horizontal,
    },
    WorkItem {
        id: 202,
        title: "Coastal Vibe",
        category: "Travel",
        client: "Explore",
        year: "2024",
        media: "https://www.dropbox.com/scl/fi/85hdwt3zp14t906l471rb/more-like-these-Or-the-pov-vids-horizontal.mp4?rlkey=yaqwfzz8mjo8xonmztt9lk8py&st=xufsz2at&raw=1",
        orientation: Orientation::Horizontal,
    },
    WorkItem {
        id: 203,
        title: "Purple Sunset",
        category: "Nature",
        client: "Atmosphere",
        year: "2023",
        media: "https://www.dropbox.com/scl/fi/gvz4m0i4qt6tmhuwtszeu/purple-frames-cinematography-ocean-beach-sunset-horizontal.mp4?rlkey=okqprv70ip1yf0lonxl8i3fqy&st=wd4elu9s&raw=1",
        orientation: Orientation::Horizontal,
    },
];

/// Limited run prints
pub static PRINTS: &[StoreItem] = &[
    StoreItem {
        id: 1,
        name: "Nightcall",
        category: "Limited Edition Print",
        price: "$145.00",
        image: "https://images.unsplash.com/photo-1563089145-599997674d42?auto=format&fit=crop&w=800&q=80",
        size: Some("24x36"),
    },
    StoreItem {
        id: 2,
        name: "Apex",
        category: "Fine Art Print",
        price: "$150.00",
        image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=800&q=80",
        size: Some("24x36"),
    },
    StoreItem {
        id: 3,
        name: "Void",
        category: "Limited Edition Print",
        price: "$135.00",
        image: "https://images.unsplash.com/photo-1478760329108-5c3ed9d495a0?auto=format&fit=crop&w=800&q=80",
        size: Some("18x24"),
    },
    StoreItem {
        id: 4,
        name: "Neon Tokyo",
        category: "Fine Art Print",
        price: "$120.00",
        image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?auto=format&fit=crop&w=800&q=80",
        size: Some("18x24"),
    },
];

/// Apparel and accessories
pub static MERCH: &[StoreItem] = &[
    StoreItem {
        id: 5,
        name: "Stealth Hoodie",
        category: "Apparel",
        price: "$95.00",
        image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?auto=format&fit=crop&w=800&q=80",
        size: None,
    },
    StoreItem {
        id: 6,
        name: "Director's Cap",
        category: "Accessories",
        price: "$45.00",
        image: "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?auto=format&fit=crop&w=800&q=80",
        size: None,
    },
    StoreItem {
        id: 7,
        name: "Oversized Tee",
        category: "Apparel",
        price: "$55.00",
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&w=800&q=80",
        size: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_work_ids_are_unique() {
        let catalog = Catalog::portfolio();
        let ids: HashSet<u32> = catalog
            .vertical
            .iter()
            .chain(catalog.horizontal.iter())
            .map(|work| work.id)
            .collect();

        assert_eq!(ids.len(), catalog.vertical.len() + catalog.horizontal.len());
    }

    #[test]
    fn test_sections_hold_matching_orientation() {
        let catalog = Catalog::portfolio();
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            assert!(catalog
                .section(orientation)
                .iter()
                .all(|work| work.orientation == orientation));
        }
    }
}
