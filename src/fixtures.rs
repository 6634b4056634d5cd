//! Placeholder content and fixed page copy.
//!
//! The remote-sourced lists ([`blog_posts`], [`gallery_images`],
//! [`testimonials`]) stand in whenever the content snapshot has nothing for
//! them. Everything else here is static site copy with no remote source.

use crate::types::{
    BlogPost, Collection, FeatureSlide, GalleryItem, Highlight, HighlightIcon, ImageRef, NavLink,
    PartnerLogo, ProductCategory, SocialLink, StatItem, TestimonialItem, ValueCard,
};

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About", href: "/about/" },
    NavLink { name: "Products", href: "/products/" },
    NavLink { name: "Gallery", href: "/gallery/" },
    NavLink { name: "Blogs", href: "/blogs/" },
    NavLink { name: "Contact", href: "/contact/" },
];

// =========================================================================
// Home page
// =========================================================================

pub const HERO_BACKGROUND: &str = "/images/home/hero-bg.webp";
pub const SECTION_BACKGROUND: &str = "/images/home/heroAboutbg.webp";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Building your home is a dream, and we know the process can be challenging. At Searock, we’re here to make it easier.",
    "For 30 years, families have trusted us not just for products, but for clear and honest guidance.",
    "Our purpose is simple: helping you choose the right products so your home-building journey feels smoother and more confident.",
];

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight { label: "Maintenance Support", icon: HighlightIcon::Home },
    Highlight { label: "Wide Collections", icon: HighlightIcon::Layers },
    Highlight { label: "Best Prices", icon: HighlightIcon::Rupee },
    Highlight { label: "Quality Products", icon: HighlightIcon::Shield },
];

pub const STATS_HEADING: [&str; 2] = ["Laying the Foundation for", "Beautiful Living"];

pub const STATS: [StatItem; 4] = [
    StatItem { value: 10, suffix: "K+", label: "Homes Transformed" },
    StatItem { value: 50, suffix: "K+", label: "Happy Customers" },
    StatItem { value: 200, suffix: "+", label: "Product Varieties" },
    StatItem { value: 100, suffix: "%", label: "Satisfaction Rate" },
];

pub const STORY_IMAGE: ImageRef = ImageRef {
    src: "/images/home/heroStory.webp",
    alt: "Happy family enjoying their beautifully floored home",
};

pub const STORY_TEXT: &str = "Today, we're proud to be your trusted flooring partner, carefully selecting every product to meet our strict standards for quality and environmental responsibility.";

pub const COLLECTIONS_INTRO: &str = "Discover our extensive range of flooring solutions, each crafted to deliver exceptional quality, durability, and aesthetic appeal for your space.";

const SHOWCASE_ALTS: [&str; 3] = [
    "Modern minimalist interior with wooden flooring and white walls",
    "Colorful geometric patterned tiles in hotel corridor",
    "Contemporary white interior with neutral tiled flooring",
];

pub const COLLECTIONS: [Collection; 3] = [
    Collection {
        title: "Tiles",
        description: "Searock's tiles collection blends style, durability, and modern design. From classic to contemporary, our tiles transform any space with lasting elegance and quality.",
        images: [
            ImageRef { src: "/images/collections/tile-1.webp", alt: SHOWCASE_ALTS[0] },
            ImageRef { src: "/images/collections/tile-2.webp", alt: SHOWCASE_ALTS[1] },
            ImageRef { src: "/images/collections/tile-3.webp", alt: SHOWCASE_ALTS[2] },
        ],
    },
    Collection {
        title: "Granite",
        description: "Searock’s granite collection blends strength and elegance, offering durable, timeless surfaces that elevate any space.",
        images: [
            ImageRef { src: "/images/collections/granites-1.webp", alt: SHOWCASE_ALTS[0] },
            ImageRef { src: "/images/collections/granites-2.webp", alt: SHOWCASE_ALTS[1] },
            ImageRef { src: "/images/collections/granites-3.webp", alt: SHOWCASE_ALTS[2] },
        ],
    },
    Collection {
        title: "Bathware",
        description: "Searock’s bathware collection blends style and functionality, offering elegant, durable solutions that make every bath space refreshing.",
        images: [
            ImageRef { src: "/images/collections/bathware-1.webp", alt: SHOWCASE_ALTS[0] },
            ImageRef { src: "/images/collections/bathware-2.webp", alt: SHOWCASE_ALTS[1] },
            ImageRef { src: "/images/collections/bathware-3.webp", alt: SHOWCASE_ALTS[2] },
        ],
    },
];

pub const PARTNERS_BACKGROUND: &str = "/images/home/partners-bg.webp";

pub const PARTNERS: [PartnerLogo; 6] = [
    PartnerLogo { src: "/images/partners/haique.png", alt: "IPSUM partner logo", name: "IPSUM" },
    PartnerLogo { src: "/images/partners/kajaria.png", alt: "Partner 2 logo", name: "Partner 2" },
    PartnerLogo { src: "/images/partners/mapai.png", alt: "Logoipsum partner logo", name: "Logoipsum" },
    PartnerLogo { src: "/images/partners/RAK.png", alt: "Partner 2 logo", name: "Partner 2" },
    PartnerLogo { src: "/images/partners/somany.png", alt: "IPSUM partner logo", name: "IPSUM" },
    PartnerLogo { src: "/images/partners/varmora.png", alt: "Logoipsum partner logo", name: "Logoipsum" },
];

/// No placeholder testimonials exist; the section shows its heading only
/// until the API provides some.
pub fn testimonials() -> Vec<TestimonialItem> {
    Vec::new()
}

// =========================================================================
// Blogs and gallery
// =========================================================================

struct BlogSeed {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    category: &'static str,
    read_time: &'static str,
    image: &'static str,
    content: [&'static str; 2],
}

const BLOG_AUTHOR: &str = "Mike Chen";
const BLOG_DATE: &str = "3/10/2024";

const BLOG_SEEDS: [BlogSeed; 8] = [
    BlogSeed {
        id: "tile-installation-guide",
        title: "The Ultimate Guide to Tile Installation",
        summary: "Everything you need to know for a perfect tile finish, from prep to polish.",
        category: "Installation",
        read_time: "8 min read",
        image: "/images/blogs/1.jpg",
        content: [
            "Learn tools, adhesives, and subfloor prep to avoid lippage and hollow spots.",
            "We cover layout planning, cutting methods, and grouting for a durable finish.",
        ],
    },
    BlogSeed {
        id: "choose-right-tiles",
        title: "Choosing the Right Tiles for Your Space",
        summary: "Find the perfect blend of style, durability, and function for every room.",
        category: "Installation",
        read_time: "8 min read",
        image: "/images/blogs/2.jpg",
        content: [
            "Compare porcelain, ceramic, and stone for different rooms and traffic levels.",
            "Balance slip resistance, water absorption, and style to get the look you want.",
        ],
    },
    BlogSeed {
        id: "trends-modern-interiors",
        title: "Designing a Spa-like Bathroom at Home",
        summary: "Discover the latest designs transforming homes and commercial spaces.",
        category: "Design",
        read_time: "7 min read",
        image: "/images/products/bath.jpg",
        content: [
            "Explore large-format slabs, textured finishes, and warm neutral palettes.",
            "See how statement patterns elevate kitchens, baths, and living spaces.",
        ],
    },
    BlogSeed {
        id: "bathroom-styles",
        title: "Tile Trends That Elevate Modern Interiors",
        summary: "Create a serene retreat with materials and finishes that last.",
        category: "Design",
        read_time: "6 min read",
        image: "/images/blogs/4.webp",
        content: [
            "Layer natural stone, warm woods, and matte fittings to create a calm retreat.",
            "Ventilation, lighting, and slip-resistant surfaces complete the spa feel.",
        ],
    },
    BlogSeed {
        id: "grout-care",
        title: "Grout Care Essentials",
        summary: "Keep your tiles looking new with simple maintenance routines.",
        category: "Care",
        read_time: "5 min read",
        image: "/images/blogs/5.jpg",
        content: [
            "Pick the right grout type and sealing schedule to resist stains.",
            "Simple weekly routines keep joints clean and hygienic.",
        ],
    },
    BlogSeed {
        id: "stone-vs-porcelain",
        title: "Natural Stone vs. Porcelain: What to Choose?",
        summary: "Understand pros and cons to pick the right surface for your project.",
        category: "Guide",
        read_time: "9 min read",
        image: "/images/blogs/6.jpg",
        content: [
            "Understand porosity, maintenance, and cost over time.",
            "A decision matrix helps match material to budget and performance.",
        ],
    },
    BlogSeed {
        id: "kitchen-flooring",
        title: "Kitchen Flooring That Works Hard",
        summary: "Durable, beautiful choices that stand up to heavy use.",
        category: "Guide",
        read_time: "6 min read",
        image: "/images/blogs/8.avif",
        content: [
            "Shortlist materials that handle spills, heat, and heavy footfall.",
            "Installation tips extend lifespan and make cleaning easier.",
        ],
    },
    BlogSeed {
        id: "bathware-upgrades",
        title: "Essential Bathware Upgrades for Comfort",
        summary: "Enhance daily routines with fixtures that combine form and function.",
        category: "Bathware",
        read_time: "6 min read",
        image: "/images/blogs/7.jpeg",
        content: [
            "Upgrade faucets, showers, and sanitaryware for efficiency and comfort.",
            "Smart storage and accessories make everyday tasks effortless.",
        ],
    },
];

/// The eight placeholder articles.
pub fn blog_posts() -> Vec<BlogPost> {
    BLOG_SEEDS
        .iter()
        .map(|seed| BlogPost {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            summary: seed.summary.to_string(),
            category: seed.category.to_string(),
            read_time: seed.read_time.to_string(),
            author: BLOG_AUTHOR.to_string(),
            date: BLOG_DATE.to_string(),
            image: seed.image.to_string(),
            content: seed.content.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

const GALLERY: [(&str, &str); 20] = [
    ("/images/gallery/g1.jpg", "Showroom interior 1"),
    ("/images/gallery/g2.jpeg", "Showroom interior 2"),
    ("/images/gallery/g3.webp", "Showroom interior 3"),
    ("/images/gallery/g4.jpg", "Showroom interior 4"),
    ("/images/gallery/g5.avif", "Showroom interior 5"),
    ("/images/gallery/g8.jpg", "Showroom interior 8"),
    ("/images/collections/tile-1.webp", "Tile collection 1"),
    ("/images/collections/tile-2.webp", "Tile collection 2"),
    ("/images/collections/tile-3.webp", "Tile collection 3"),
    ("/images/collections/granites-1.webp", "Granite collection 1"),
    ("/images/collections/granites-2.webp", "Granite collection 2"),
    ("/images/collections/granites-3.webp", "Granite collection 3"),
    ("/images/collections/bathware-1.webp", "Bathware collection 1"),
    ("/images/collections/bathware-2.webp", "Bathware collection 2"),
    ("/images/collections/bathware-3.webp", "Bathware collection 3"),
    ("/images/gallery/g6.jpg", "Showroom interior 6"),
    ("/images/gallery/g9.jpg", "Showroom interior 7"),
    ("/images/products/tile.jpg", "Tile product"),
    ("/images/products/granite.jpg", "Granite product"),
    ("/images/products/bath.jpg", "Bath product"),
];

pub fn gallery_images() -> Vec<GalleryItem> {
    GALLERY
        .iter()
        .map(|(src, alt)| GalleryItem {
            src: src.to_string(),
            alt: alt.to_string(),
        })
        .collect()
}

// =========================================================================
// Products
// =========================================================================

pub const PRODUCTS_INTRO: &str = "Discover our comprehensive range of premium flooring solutions designed to transform your space.";

pub const PRODUCT_CATEGORIES: [ProductCategory; 3] = [
    ProductCategory {
        name: "Granites",
        description: "Elegant and durable granite solutions that bring natural stone beauty to your spaces.",
        image: "/images/products/granite.jpg",
        features: &["Highly durable", "Heat resistant", "Luxurious finish"],
    },
    ProductCategory {
        name: "Tiles",
        description: "Premium quality tiles that combine beauty with durability. Perfect for floors, walls, and any surface.",
        image: "/images/products/tile.jpg",
        features: &["Water resistant", "Easy maintenance", "Wide variety of designs"],
    },
    ProductCategory {
        name: "Bathware",
        description: "Complete bathroom solutions including sanitaryware, fittings, and accessories for modern bathrooms.",
        image: "/images/products/bath.jpg",
        features: &["Premium quality", "Water efficient", "Contemporary designs"],
    },
];

pub const FEATURE_SLIDES: [FeatureSlide; 3] = [
    FeatureSlide {
        title: "Wide Collections to Explore",
        body: "Discover an extensive range of flooring tiles, natural stones, and bathware, carefully curated to match every style and budget. Choose from textures, finishes, and sizes tailored to your project.",
    },
    FeatureSlide {
        title: "Guidance at Every Step",
        body: "From choosing the right design to final installation, our experts stand by you with honest advice and personalized support. We help you make confident decisions at every stage.",
    },
    FeatureSlide {
        title: "Quality You Can Trust",
        body: "We ensure every product meets our high standards, from sourcing to delivery, ensuring you receive only the best. Rigorous checks and careful packaging ensure lasting performance.",
    },
];

// =========================================================================
// About
// =========================================================================

pub const ABOUT_INTRO: &str = "30+ years of transforming homes with sustainable flooring, natural stone, and bathware. We blend friendship, knowledge, and responsibility into every solution.";

pub const ABOUT_META: &str = "About Searock: 30+ years of transforming homes with sustainable flooring, natural stone, and bathware.";

/// Headline figures on the about page: number, suffix, label.
pub const ABOUT_STATS: [(&str, &str, &str); 3] = [
    ("30", "+", "Years of Experience"),
    ("10k", "+", "Happy Homes"),
    ("200", "+", "Product Varieties"),
];

pub const VALUE_CARDS: [ValueCard; 4] = [
    ValueCard {
        title: "Our Vision",
        body: "Our vision is to be the most trusted Flooring Solutions Provider as defined by the Customers we serve. We elevate living spaces with sustainable materials, timeless design, and trusted expertise.",
    },
    ValueCard {
        title: "Our Purpose",
        body: "Our mission is to provide sustainable, design-forward flooring solutions that improve everyday living. We simplify decisions with honest guidance and curated collections for every budget and style.",
    },
    ValueCard {
        title: "Our Values",
        body: "Integrity, care, and long-term partnerships guide how we serve our customers every day. We stand by quality, transparency, and a commitment to sustainable choices.",
    },
    ValueCard {
        title: "Our Personality",
        body: "We love to help people because it makes their life easier. We avoid practices that reduce a helping mindset. Friendly, dependable, and knowledgeable: that’s how we show up.",
    },
];

pub const DIFFERENCE_TEXT: &str = "For over 30 years, Searock has been helping families create homes that reflect their dreams. With personalized solutions, expert guidance, and sustainable products, we bring comfort, beauty, and lasting value to every space. Choose Searock your trusted flooring partner for life.";

pub const DIFFERENCE_POINTS: [&str; 3] = [
    "Innovation-driven Solutions",
    "Personalized Approach",
    "Superior Customer Service",
];

// =========================================================================
// Footer
// =========================================================================

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Facebook", href: "https://facebook.com/searock" },
    SocialLink { name: "Twitter", href: "https://twitter.com/searock" },
    SocialLink { name: "YouTube", href: "https://youtube.com/@searock" },
    SocialLink { name: "Instagram", href: "https://www.instagram.com/searocktilegallery" },
];

pub const FOOTER_MENU: [NavLink; 3] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About Us", href: "/about/" },
    NavLink { name: "Contact Us", href: "/contact/" },
];

pub const FOOTER_QUICK_LINKS: [NavLink; 3] = [
    NavLink { name: "Blog", href: "/blogs/" },
    NavLink { name: "Products", href: "/products/" },
    NavLink { name: "Solutions", href: "/products/" },
];

pub const COPYRIGHT: &str = "@ 2025 Searock, All rights reserved";
