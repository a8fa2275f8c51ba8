use house_points_shared::ColorTheme;
pub use house_points_shared::{BRAND_GOLD, BRAND_PURPLE};

/// Format RGBA as a CSS color string.
pub fn rgba_css((r, g, b): (u8, u8, u8), a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Inline style for a themed card body.
pub fn card_style(theme: &ColorTheme) -> String {
    format!(
        "border-radius: 16px; border: 1px solid rgba(255,255,255,0.25); box-shadow: 0 20px 40px -12px rgba(28,25,23,0.25); padding: 20px; background: {};",
        theme.card
    )
}

/// Inline style for a rounded pill using `swatch` colors.
pub fn pill_style(swatch_css: &str, font_size: &str) -> String {
    format!(
        "padding: 4px 12px; border-radius: 9999px; font-size: {font_size}; font-weight: 600; flex-shrink: 0; {swatch_css}"
    )
}

#[cfg(test)]
mod tests {
    use super::{BRAND_GOLD, rgba_css};

    #[test]
    fn formats_rgba() {
        assert_eq!(rgba_css(BRAND_GOLD.rgb, 0.6), "rgba(244,189,29,0.6)");
    }
}
