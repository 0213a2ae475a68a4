//! Embedded SVG artwork
//!
//! Line icons use `currentColor` so `svg::Style` can tint them; the banner
//! and placeholder artwork carry their own colours.

pub const SEARCH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="7"/><line x1="21" y1="21" x2="16.65" y2="16.65"/></svg>"#;

pub const CLOSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round"><line x1="6" y1="6" x2="18" y2="18"/><line x1="18" y1="6" x2="6" y2="18"/></svg>"#;

pub const CHEVRON_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="15 18 9 12 15 6"/></svg>"#;

pub const CHEVRON_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="9 18 15 12 9 6"/></svg>"#;

pub const REFRESH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="23 4 23 10 17 10"/><path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/></svg>"#;

pub const ALERT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="7" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/></svg>"#;

pub const SUN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"><circle cx="12" cy="12" r="4"/><line x1="12" y1="2" x2="12" y2="4"/><line x1="12" y1="20" x2="12" y2="22"/><line x1="2" y1="12" x2="4" y2="12"/><line x1="20" y1="12" x2="22" y2="12"/><line x1="4.9" y1="4.9" x2="6.3" y2="6.3"/><line x1="17.7" y1="17.7" x2="19.1" y2="19.1"/><line x1="4.9" y1="19.1" x2="6.3" y2="17.7"/><line x1="17.7" y1="6.3" x2="19.1" y2="4.9"/></svg>"#;

pub const MOON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/></svg>"#;

pub const GLOBE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/></svg>"#;

/// Shown for records without an image and for images that failed to load
pub const FLOWER_PLACEHOLDER: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
<rect width="200" height="200" fill="#e8f3ed"/>
<path d="M100 118 C98 150 92 170 88 196" stroke="#2a734f" stroke-width="6" fill="none" stroke-linecap="round"/>
<path d="M95 160 C75 150 62 152 52 162 C68 170 82 170 95 160 Z" fill="#208f58"/>
<g fill="#f7a8c4">
<ellipse cx="100" cy="62" rx="16" ry="26"/>
<ellipse cx="100" cy="62" rx="16" ry="26" transform="rotate(72 100 88)"/>
<ellipse cx="100" cy="62" rx="16" ry="26" transform="rotate(144 100 88)"/>
<ellipse cx="100" cy="62" rx="16" ry="26" transform="rotate(216 100 88)"/>
<ellipse cx="100" cy="62" rx="16" ry="26" transform="rotate(288 100 88)"/>
</g>
<circle cx="100" cy="88" r="14" fill="#f6c945"/>
</svg>"##;

/// Banner background: a stylised flower field
pub const BANNER_BACKGROUND: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1200 250" preserveAspectRatio="xMidYMid slice">
<defs>
<linearGradient id="sky" x1="0" y1="0" x2="0" y2="1">
<stop offset="0" stop-color="#f9e0ea"/>
<stop offset="1" stop-color="#d8efe2"/>
</linearGradient>
</defs>
<rect width="1200" height="250" fill="url(#sky)"/>
<path d="M0 170 C200 140 400 190 600 165 C800 140 1000 185 1200 160 L1200 250 L0 250 Z" fill="#3f8f65"/>
<path d="M0 200 C250 180 450 220 700 200 C900 185 1050 215 1200 200 L1200 250 L0 250 Z" fill="#2a734f"/>
<g fill="#f13536">
<circle cx="80" cy="190" r="9"/><circle cx="210" cy="175" r="7"/><circle cx="340" cy="200" r="10"/>
<circle cx="520" cy="185" r="8"/><circle cx="760" cy="195" r="9"/><circle cx="930" cy="178" r="7"/>
<circle cx="1110" cy="192" r="10"/>
</g>
<g fill="#f7a8c4">
<circle cx="140" cy="210" r="8"/><circle cx="280" cy="190" r="6"/><circle cx="450" cy="215" r="9"/>
<circle cx="640" cy="205" r="7"/><circle cx="850" cy="212" r="8"/><circle cx="1020" cy="200" r="6"/>
</g>
<g fill="#f6c945">
<circle cx="80" cy="190" r="3"/><circle cx="340" cy="200" r="3"/><circle cx="760" cy="195" r="3"/>
<circle cx="1110" cy="192" r="3"/><circle cx="450" cy="215" r="3"/><circle cx="850" cy="212" r="3"/>
</g>
</svg>"##;

/// Amana wordmark shown centred on the banner
pub const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 420 140">
<g transform="translate(70 70)">
<g fill="#f13536">
<ellipse cx="0" cy="-26" rx="14" ry="24"/>
<ellipse cx="0" cy="-26" rx="14" ry="24" transform="rotate(72)"/>
<ellipse cx="0" cy="-26" rx="14" ry="24" transform="rotate(144)"/>
<ellipse cx="0" cy="-26" rx="14" ry="24" transform="rotate(216)"/>
<ellipse cx="0" cy="-26" rx="14" ry="24" transform="rotate(288)"/>
</g>
<circle r="12" fill="#f6c945"/>
</g>
<text x="140" y="90" font-family="Georgia, serif" font-size="64" font-weight="bold" fill="#ffffff" stroke="#17402c" stroke-width="2">AMANA</text>
</svg>"##;
