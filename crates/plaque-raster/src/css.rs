use crate::Rgba;

/// Parse a CSS-style color string.
///
/// Supports:
/// - Hex: `#RGB`, `#RRGGBB`, `#RRGGBBAA`
/// - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)` with u8 channels and a
///   float alpha
/// - A small set of named colors (`black`, `white`, `red`, ...) plus
///   `transparent`
///
/// Returns `None` for anything it cannot parse.
pub fn parse_color(color_str: &str) -> Option<Rgba> {
    let trimmed = color_str.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        let hex = hex.trim();
        // Slicing below is byte-indexed; non-ASCII payloads are never valid
        // hex, so reject them before they can split a char.
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            3 => {
                // #RGB shorthand, each digit doubled
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Rgba::from_srgba_u8([r * 17, g * 17, b * 17, 255]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgba::from_srgba_u8([r, g, b, 255]))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Rgba::from_srgba_u8([r, g, b, a]))
            }
            _ => None,
        };
    }

    if let Some(args) = strip_func(trimmed, "rgba") {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let r: u8 = parts[0].parse().ok()?;
        let g: u8 = parts[1].parse().ok()?;
        let b: u8 = parts[2].parse().ok()?;
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        return Some(Rgba::from_srgba_u8([
            r,
            g,
            b,
            (a * 255.0).round() as u8,
        ]));
    }

    if let Some(args) = strip_func(trimmed, "rgb") {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        let r: u8 = parts[0].parse().ok()?;
        let g: u8 = parts[1].parse().ok()?;
        let b: u8 = parts[2].parse().ok()?;
        return Some(Rgba::from_srgba_u8([r, g, b, 255]));
    }

    named_color(trimmed)
}

fn strip_func<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.trim_end().strip_suffix(')')
}

fn named_color(name: &str) -> Option<Rgba> {
    let rgba = match name.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0, 255],
        "white" => [255, 255, 255, 255],
        "red" => [255, 0, 0, 255],
        "green" => [0, 128, 0, 255],
        "lime" => [0, 255, 0, 255],
        "blue" => [0, 0, 255, 255],
        "yellow" => [255, 255, 0, 255],
        "cyan" | "aqua" => [0, 255, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255, 255],
        "gray" | "grey" => [128, 128, 128, 255],
        "silver" => [192, 192, 192, 255],
        "orange" => [255, 165, 0, 255],
        "transparent" => [0, 0, 0, 0],
        _ => return None,
    };
    Some(Rgba::from_srgba_u8(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        assert_eq!(
            parse_color("#ff0000"),
            Some(Rgba::from_srgba_u8([255, 0, 0, 255]))
        );
        assert_eq!(
            parse_color("#00ff00"),
            Some(Rgba::from_srgba_u8([0, 255, 0, 255]))
        );
        assert_eq!(
            parse_color("#0000ff80"),
            Some(Rgba::from_srgba_u8([0, 0, 255, 128]))
        );
        assert_eq!(
            parse_color("#fff"),
            Some(Rgba::from_srgba_u8([255, 255, 255, 255]))
        );
    }

    #[test]
    fn parse_functional_color() {
        assert_eq!(
            parse_color("rgb(10, 20, 30)"),
            Some(Rgba::from_srgba_u8([10, 20, 30, 255]))
        );
        assert_eq!(
            parse_color("rgba(10, 20, 30, 0.5)"),
            Some(Rgba::from_srgba_u8([10, 20, 30, 128]))
        );
    }

    #[test]
    fn parse_named_color() {
        assert_eq!(parse_color("black"), Some(Rgba::from_srgba_u8([0, 0, 0, 255])));
        assert_eq!(parse_color("White"), Some(Rgba::from_srgba_u8([255, 255, 255, 255])));
        assert_eq!(parse_color("transparent"), Some(Rgba::from_srgba_u8([0, 0, 0, 0])));
    }

    #[test]
    fn parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ff"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgba(1, 2, 3, 2.0)"), None);
    }

    #[test]
    fn non_ascii_hex_is_rejected_not_panicking() {
        // "é" is two bytes, so these land mid-char for byte slicing.
        assert_eq!(parse_color("#éa"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("#é0ff00a"), None);
    }
}
