//! Category extraction and category → color assignment.
//!
//! A category is the raw value of the category field, so `1` and `"1"` are
//! different categories even though they print the same. Labels are only
//! used for display.

use lumina_core::{theme_colors, BaseColor, Color, FieldValue, Row};

/// Label of the implicit category when neither a category nor a y field is set.
pub const DEFAULT_CATEGORY_LABEL: &str = "value";

/// Whether two field values name the same category.
///
/// Plain equality, except that NaN matches NaN.
#[must_use]
pub fn same_category(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

/// Distinct values of `field` across `rows`, in first-seen order.
///
/// Missing and explicit null values are the same category. An empty field
/// name yields no categories.
#[must_use]
pub fn construct_categories(rows: &[Row], field: &str) -> Vec<FieldValue> {
    let mut categories: Vec<FieldValue> = Vec::new();
    if field.is_empty() {
        return categories;
    }
    for row in rows {
        let value = row.value_or_null(field);
        if !categories.iter().any(|known| same_category(known, &value)) {
            categories.push(value);
        }
    }
    categories
}

/// Label used for the single series of an uncategorised chart.
#[must_use]
pub fn implicit_category_label(y_field: &str) -> String {
    if y_field.is_empty() {
        DEFAULT_CATEGORY_LABEL.to_string()
    } else {
        y_field.to_string()
    }
}

/// The single category of an uncategorised chart.
#[must_use]
pub fn implicit_category(y_field: &str) -> FieldValue {
    FieldValue::Text(implicit_category_label(y_field))
}

/// Rows whose `field` value is `category`.
#[must_use]
pub fn rows_in_category(rows: &[Row], field: &str, category: &FieldValue) -> Vec<Row> {
    rows.iter()
        .filter(|row| same_category(&row.value_or_null(field), category))
        .cloned()
        .collect()
}

/// Ordered category → color map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryColors {
    entries: Vec<(FieldValue, Color)>,
}

impl CategoryColors {
    /// Color assigned to `category`, if known.
    #[must_use]
    pub fn get(&self, category: &FieldValue) -> Option<Color> {
        self.entries
            .iter()
            .find(|(known, _)| same_category(known, category))
            .map(|(_, color)| *color)
    }

    /// Color for `category`, gray when unknown.
    #[must_use]
    pub fn color_for(&self, category: &FieldValue) -> Color {
        self.get(category)
            .unwrap_or_else(|| BaseColor::Gray.to_color())
    }

    /// Entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldValue, Color)> {
        self.entries.iter().map(|(category, color)| (category, *color))
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Zip categories with `colors`, cycling: category `i` gets `colors[i % len]`.
///
/// An empty color list falls back to the theme color range.
#[must_use]
pub fn construct_category_colors(categories: &[FieldValue], colors: &[Color]) -> CategoryColors {
    let fallback;
    let palette = if colors.is_empty() {
        fallback = theme_colors();
        &fallback
    } else {
        colors
    };
    CategoryColors {
        entries: categories
            .iter()
            .enumerate()
            .map(|(i, category)| (category.clone(), palette[i % palette.len()]))
            .collect(),
    }
}
