//! [`Style`] to [`Format`] mapping.

use it8grid_core::Rgb8;
use it8grid_layout::{HAlign, Style, VAlign};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern};

#[inline]
fn color(c: Rgb8) -> Color {
    Color::RGB(c.to_u32())
}

/// Builds the cell format for a style. Unset style fields keep the
/// workbook defaults.
pub(crate) fn to_format(style: &Style) -> Format {
    let mut format = Format::new();

    if style.bold {
        format = format.set_bold();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if let Some(c) = style.font_color {
        format = format.set_font_color(color(c));
    }
    if let Some(c) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(color(c));
    }

    let h = match style.h_align {
        HAlign::General => None,
        HAlign::Left => Some(FormatAlign::Left),
        HAlign::Center => Some(FormatAlign::Center),
        HAlign::Right => Some(FormatAlign::Right),
    };
    let v = match style.v_align {
        VAlign::General => None,
        VAlign::Top => Some(FormatAlign::Top),
        VAlign::Center => Some(FormatAlign::VerticalCenter),
        VAlign::Bottom => Some(FormatAlign::Bottom),
    };
    for align in [h, v].into_iter().flatten() {
        format = format.set_align(align);
    }

    if let Some(code) = &style.num_format {
        format = format.set_num_format(code);
    }
    format
}
