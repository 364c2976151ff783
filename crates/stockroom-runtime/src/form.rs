//! Product editor form.
//!
//! Holds the raw text of all six fields while the editor is open. Numeric
//! fields are parsed only on submit; text that is not a valid non-negative
//! number rejects the submit instead of being coerced.

use std::fmt;
use stockroom_types::{MAX_PRICE, Product, ProductDraft, ProductId};

/// Image reference pre-filled for new products
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/seed/newproduct/400/400";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Sku,
    Category,
    Quantity,
    Price,
    ImageUrl,
}

impl FormField {
    /// Fields in on-screen order
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Sku,
        FormField::Category,
        FormField::Quantity,
        FormField::Price,
        FormField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Product name",
            FormField::Sku => "SKU",
            FormField::Category => "Category",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price ($)",
            FormField::ImageUrl => "Image URL",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the form creates a new product or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// What a successful submit asks the store to do
#[derive(Debug, Clone, PartialEq)]
pub enum SaveIntent {
    Create(ProductDraft),
    Update(Product),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    NotANumber,
    Negative,
    TooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::NotANumber => write!(f, "{} must be a number", self.field),
            FieldErrorKind::Negative => write!(f, "{} must not be negative", self.field),
            FieldErrorKind::TooLarge => {
                write!(f, "{} must be at most {}", self.field, MAX_PRICE)
            }
        }
    }
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    fn push(&mut self, field: FormField, kind: FieldErrorKind) {
        self.errors.push(FieldError { field, kind });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    mode: FormMode,
    inputs: [String; 6],
    focused: FormField,
    errors: ValidationErrors,
}

impl EditForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            inputs: [
                String::new(),
                String::new(),
                String::new(),
                "0".to_string(),
                "0".to_string(),
                DEFAULT_IMAGE_URL.to_string(),
            ],
            focused: FormField::Name,
            errors: ValidationErrors::default(),
        }
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            inputs: [
                product.name.clone(),
                product.sku.clone(),
                product.category.clone(),
                product.quantity.to_string(),
                product.price.to_string(),
                product.image_url.clone(),
            ],
            focused: FormField::Name,
            errors: ValidationErrors::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.inputs[field.index()]
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        self.inputs[field.index()] = text.into();
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.inputs[field.index()].push(c);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.inputs[field.index()].pop();
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        let next = (self.focused.index() + 1) % FormField::ALL.len();
        self.focused = FormField::ALL[next];
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::ALL.len();
        let prev = (self.focused.index() + len - 1) % len;
        self.focused = FormField::ALL[prev];
    }

    /// Errors from the last rejected submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validate the inputs and build the save intent.
    ///
    /// On failure the inputs are left as they are and the errors are kept on
    /// the form for display.
    pub fn submit(&mut self) -> Result<SaveIntent, ValidationErrors> {
        match self.validate() {
            Ok(draft) => {
                self.errors = ValidationErrors::default();
                Ok(match self.mode {
                    FormMode::Create => SaveIntent::Create(draft),
                    FormMode::Edit(id) => SaveIntent::Update(Product::from_draft(id, draft)),
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                errors.push(field, FieldErrorKind::Required);
            }
        }

        let quantity = parse_quantity(self.value(FormField::Quantity));
        if let Err(kind) = quantity
            && errors.for_field(FormField::Quantity).is_none()
        {
            errors.push(FormField::Quantity, kind);
        }

        let price = parse_price(self.value(FormField::Price));
        if let Err(kind) = price
            && errors.for_field(FormField::Price).is_none()
        {
            errors.push(FormField::Price, kind);
        }

        if !errors.is_empty() {
            errors.errors.sort_by_key(|e| e.field.index());
            return Err(errors);
        }

        Ok(ProductDraft {
            name: self.value(FormField::Name).to_string(),
            sku: self.value(FormField::Sku).to_string(),
            category: self.value(FormField::Category).to_string(),
            quantity: quantity.unwrap_or_default(),
            price: price.unwrap_or_default(),
            image_url: self.value(FormField::ImageUrl).to_string(),
        })
    }
}

fn parse_quantity(text: &str) -> Result<u32, FieldErrorKind> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(quantity) => Ok(quantity),
        Err(_) if is_negative_number(text) => Err(FieldErrorKind::Negative),
        Err(_) => Err(FieldErrorKind::NotANumber),
    }
}

fn parse_price(text: &str) -> Result<f64, FieldErrorKind> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| FieldErrorKind::NotANumber)?;

    if !price.is_finite() {
        return Err(FieldErrorKind::NotANumber);
    }
    if price < 0.0 {
        return Err(FieldErrorKind::Negative);
    }
    if price > MAX_PRICE {
        return Err(FieldErrorKind::TooLarge);
    }
    Ok(price)
}

fn is_negative_number(text: &str) -> bool {
    text.starts_with('-') && text[1..].parse::<u64>().is_ok()
}
