//! Cell styles.
//!
//! A [`Style`] is an immutable value. Variants are derived from a base
//! style with the `with_*` methods, which return a new style and leave the
//! base untouched:
//!
//! ```rust
//! use it8grid_layout::Theme;
//! use it8grid_core::Rgb8;
//!
//! let theme = Theme::default();
//! let graded = theme.value.with_font_color(Rgb8::from_u32(0xFF0000));
//!
//! assert_eq!(graded.font_color, Some(Rgb8::from_u32(0xFF0000)));
//! assert_eq!(theme.value.font_color, Some(Rgb8::WHITE));
//! assert_eq!(graded.num_format, theme.value.num_format);
//! ```

use it8grid_core::Rgb8;

/// Neutral fill used for headers and flattened cells.
pub const NEUTRAL_FILL: Rgb8 = Rgb8::from_u32(0xC0C0C0);

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    /// Sink default (text left, numbers right).
    #[default]
    General,
    /// Left.
    Left,
    /// Centered.
    Center,
    /// Right.
    Right,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    /// Sink default (bottom).
    #[default]
    General,
    /// Top.
    Top,
    /// Centered.
    Center,
    /// Bottom.
    Bottom,
}

/// Visual attributes of a cell.
///
/// `None` fields fall back to the sink's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Bold font.
    pub bold: bool,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Font color.
    pub font_color: Option<Rgb8>,
    /// Solid background fill.
    pub fill: Option<Rgb8>,
    /// Horizontal alignment.
    pub h_align: HAlign,
    /// Vertical alignment.
    pub v_align: VAlign,
    /// Number format code, e.g. `"0.00"`.
    pub num_format: Option<String>,
}

impl Style {
    /// The unstyled default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with bold font.
    pub fn with_bold(&self) -> Self {
        Self {
            bold: true,
            ..self.clone()
        }
    }

    /// Copy with the given font size.
    pub fn with_font_size(&self, points: f64) -> Self {
        Self {
            font_size: Some(points),
            ..self.clone()
        }
    }

    /// Copy with the given font color.
    pub fn with_font_color(&self, color: Rgb8) -> Self {
        Self {
            font_color: Some(color),
            ..self.clone()
        }
    }

    /// Copy with a solid fill.
    pub fn with_fill(&self, color: Rgb8) -> Self {
        Self {
            fill: Some(color),
            ..self.clone()
        }
    }

    /// Copy with the given alignment.
    pub fn with_align(&self, h_align: HAlign, v_align: VAlign) -> Self {
        Self {
            h_align,
            v_align,
            ..self.clone()
        }
    }

    /// Copy with a number format.
    pub fn with_num_format(&self, format: impl Into<String>) -> Self {
        Self {
            num_format: Some(format.into()),
            ..self.clone()
        }
    }
}

/// Every styling constant of the rendered workbook.
///
/// Built once and passed by reference to the layout functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Grid cell width in character units.
    pub cell_width: f64,
    /// Grid cell height in points.
    pub cell_height: f64,
    /// Height multiplier of the grayscale strip row.
    pub grayscale_row_scale: f64,
    /// Row and column headers of the grid.
    pub header: Style,
    /// Patch dE cells. Font color and fill are the neutral variants.
    pub value: Style,
    /// `max:` / `avg:` / `rms:` labels.
    pub stat_label: Style,
    /// Summary values.
    pub stat_value: Style,
    /// Band labels of the legend. Fill is the neutral variant.
    pub grade_label: Style,
    /// Patch ids of the legend. Fill is the neutral variant.
    pub grade_value: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let centered = Style::new().with_align(HAlign::Center, VAlign::Center);
        let right = Style::new().with_align(HAlign::Right, VAlign::Center);
        let patch = centered
            .with_bold()
            .with_font_color(Rgb8::WHITE)
            .with_fill(NEUTRAL_FILL);

        Self {
            cell_width: 6.0,
            cell_height: 32.0,
            grayscale_row_scale: 2.0,
            header: centered.with_bold().with_font_size(20.0).with_fill(NEUTRAL_FILL),
            value: patch.with_num_format("0.00"),
            stat_label: right.with_bold(),
            stat_value: right.with_num_format("0.000"),
            grade_label: centered.with_bold().with_fill(NEUTRAL_FILL),
            grade_value: patch,
        }
    }
}

impl Theme {
    /// Height of the grayscale strip row.
    pub fn grayscale_row_height(&self) -> f64 {
        self.cell_height * self.grayscale_row_scale
    }
}
