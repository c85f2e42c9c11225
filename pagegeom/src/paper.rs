//! Named paper formats at 72 dpi.

use crate::Rect;

/// Portrait sizes, in points. Lookups that tie resolve to the earlier entry.
const FORMATS: &[(&str, (u32, u32))] = &[
    ("A0", (2384, 3370)),
    ("A1", (1684, 2384)),
    ("A2", (1191, 1684)),
    ("A3", (842, 1191)),
    ("A4", (595, 842)),
    ("A5", (420, 595)),
    ("A6", (298, 420)),
    ("A7", (210, 298)),
    ("A8", (147, 210)),
    ("A9", (105, 147)),
    ("A10", (74, 105)),
    ("B0", (2835, 4008)),
    ("B1", (2004, 2835)),
    ("B2", (1417, 2004)),
    ("B3", (1001, 1417)),
    ("B4", (709, 1001)),
    ("B5", (499, 709)),
    ("B6", (354, 499)),
    ("B7", (249, 354)),
    ("B8", (176, 249)),
    ("B9", (125, 176)),
    ("B10", (88, 125)),
    ("C0", (2599, 3677)),
    ("C1", (1837, 2599)),
    ("C2", (1298, 1837)),
    ("C3", (918, 1298)),
    ("C4", (649, 918)),
    ("C5", (459, 649)),
    ("C6", (323, 459)),
    ("C7", (230, 323)),
    ("C8", (162, 230)),
    ("C9", (113, 162)),
    ("C10", (79, 113)),
    ("Tabloid Extra", (864, 1296)),
    ("Legal-13", (612, 936)),
    ("Commercial", (297, 684)),
    ("Monarch", (279, 540)),
    ("Card-5x7", (360, 504)),
    ("Card-4x6", (288, 432)),
    ("Invoice", (396, 612)),
    ("Executive", (522, 756)),
    ("Letter", (612, 792)),
    ("Legal", (612, 1008)),
    ("Ledger", (792, 1224)),
];

/// Summed deviation below which a size counts as an exact fit.
const FIT_TOLERANCE: i64 = 2;

/// All known formats with their portrait size.
pub fn formats() -> impl Iterator<Item = (&'static str, (u32, u32))> {
    FORMATS.iter().copied()
}

/// Width and height of a named format.
///
/// Names are matched case-insensitively. A `-L` suffix selects landscape,
/// `-P` or no suffix portrait.
pub fn paper_size(name: &str) -> Option<(u32, u32)> {
    let name = name.trim();
    let (base, landscape) = match name.rsplit_once('-') {
        Some((base, suffix)) if suffix.eq_ignore_ascii_case("l") => (base, true),
        Some((base, suffix)) if suffix.eq_ignore_ascii_case("p") => (base, false),
        _ => (name, false),
    };

    let (_, (width, height)) = FORMATS
        .iter()
        .find(|(format, _)| format.eq_ignore_ascii_case(base))?;

    if landscape {
        Some((*height, *width))
    } else {
        Some((*width, *height))
    }
}

/// The page rectangle `Rect(0, 0, width, height)` of a named format.
pub fn paper_rect(name: &str) -> Option<Rect> {
    paper_size(name).map(|(width, height)| Rect::new(0.0, 0.0, f64::from(width), f64::from(height)))
}

/// Names the format closest to `width` x `height`.
///
/// An exact fit (up to rounding) returns e.g. `"A4-P"`. Anything else is
/// described together with the closest format:
/// `"600 x 800 (other), closest: Letter-P = 612 x 792"`.
pub fn find_fit(width: f64, height: f64) -> String {
    let portrait = width <= height;
    let (w, h) = (width.round_ties_even() as i64, height.round_ties_even() as i64);
    let (w, h) = if portrait { (w, h) } else { (h, w) };

    let deviation = |(fw, fh): (u32, u32)| (w - i64::from(fw)).abs() + (h - i64::from(fh)).abs();
    let Some((name, (fw, fh), smallest)) = FORMATS
        .iter()
        .map(|(name, size)| (*name, *size, deviation(*size)))
        .min_by_key(|(_, _, deviation)| *deviation)
    else {
        return format!("{w} x {h} (other)");
    };

    let (fit, size) = if portrait {
        (format!("{name}-P"), format!("{fw} x {fh}"))
    } else {
        (format!("{name}-L"), format!("{fh} x {fw}"))
    };
    tracing::debug!(%fit, smallest, "closest paper format");

    if smallest < FIT_TOLERANCE {
        fit
    } else {
        format!("{w} x {h} (other), closest: {fit} = {size}")
    }
}
