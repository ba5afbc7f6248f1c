pub const SLIDE_IMAGES: [&str; 5] = [
    "/images/image1.jpg",
    "/images/image2.jpg",
    "/images/image3.jpg",
    "/images/image4.jpg",
    "/images/image5.jpg",
];

pub const LOGO_IMAGE: &str = "/images/logo.png";

pub const BRAND_TITLE: &str = "™ Noon Brand - نون براند";
pub const TAGLINE_AR: &str = "تطبيق نون براند يوفر لك افضل المنتجات بأجود الاسعار من الماركات العالمية و بتشكيلة متميزة تناسب جميع احتياجاتك";
pub const TAGLINE_EN: &str = "Noon brand app provides you the best products at the finest prices from international brands and with a distinct assortment that suits all your needs";

pub const WHATSAPP_URL: &str = "https://wa.me/9647873000184";
pub const WHATSAPP_LABEL: &str = "تواصل مع خدمة العملاء";
pub const COPYRIGHT: &str = "©جميع الحقوق محفوظة لشركة البيت التقني";

pub struct StoreLink {
    pub store: &'static str,
    pub href: &'static str,
    pub badge: &'static str,
    pub alt: &'static str,
}

pub const STORE_LINKS: [StoreLink; 3] = [
    StoreLink {
        store: "google_play",
        href: "https://play.google.com/store/apps/details?id=com.dijlahstore.app",
        badge: "/images/google-play-badge.png",
        alt: "Get it on Google Play",
    },
    StoreLink {
        store: "app_store",
        href: "https://apps.apple.com/us/app/%D9%86%D9%88%D9%86-%D8%A8%D8%B1%D8%A7%D9%86%D8%AF/id1580474195",
        badge: "/images/app-store-badge.png",
        alt: "Download on the App Store",
    },
    StoreLink {
        store: "direct_apk",
        href: "/files/noonbrand.apk",
        badge: "/images/huawei-badge.png",
        alt: "Download from Us",
    },
];

pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        platform: "facebook",
        href: "https://www.facebook.com/profile.php?id=61564289878012",
        label: "Facebook",
    },
    SocialLink {
        platform: "instagram",
        href: "https://www.instagram.com/noonbrands.iq",
        label: "Instagram",
    },
    SocialLink {
        platform: "tiktok",
        href: "https://www.tiktok.com/@noonbrand.iq",
        label: "TikTok",
    },
];

pub fn slide_alt(index: usize) -> String {
    format!("Slide {}", index + 1)
}
