#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{
    AttributeType, CreateAttributePayload, CreateProductPayload, LoginPayload,
    ProductAttributeInput, SignupPayload,
};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// SIGN IN
// =============================================================================

/// Raw sign-in form fields.
#[derive(Clone, Debug, Default)]
pub struct SigninForm {
    pub username: String,
    pub password: String,
}

/// Field-level sign-in errors; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigninErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SigninErrors {
    fn any(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

impl SigninForm {
    /// Validate and build the login payload. All field errors are
    /// reported at once.
    pub fn validate(&self) -> Result<LoginPayload, SigninErrors> {
        let mut errors = SigninErrors::default();
        let username = self.username.trim();
        if username.is_empty() {
            errors.username = Some("Username is required");
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required");
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.password = Some("Password must be at least 8 characters");
        }
        if errors.any() {
            return Err(errors);
        }
        Ok(LoginPayload {
            username: username.to_owned(),
            password: self.password.clone(),
        })
    }
}

// =============================================================================
// SIGN UP
// =============================================================================

/// Raw sign-up form fields. `confirm_password` exists only for
/// validation and is never sent to the backend.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field-level sign-up errors; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignupErrors {
    fn any(&self) -> bool {
        self.name.is_some()
            || self.username.is_some()
            || self.password.is_some()
            || self.confirm_password.is_some()
    }
}

impl SignupForm {
    /// Validate and build the signup payload.
    pub fn validate(&self) -> Result<SignupPayload, SignupErrors> {
        let mut errors = SignupErrors::default();
        let name = self.name.trim();
        let username = self.username.trim();
        if name.is_empty() {
            errors.name = Some("Name is required");
        }
        if username.is_empty() {
            errors.username = Some("Username is required");
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required");
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.password = Some("Password must be at least 8 characters");
        }
        if self.confirm_password != self.password {
            errors.confirm_password = Some("Passwords do not match");
        }
        if errors.any() {
            return Err(errors);
        }
        Ok(SignupPayload {
            name: name.to_owned(),
            username: username.to_owned(),
            password: self.password.clone(),
        })
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// Raw product form fields. Price and stock stay strings until
/// validation so the inputs can hold whatever the user typed.
#[derive(Clone, Debug, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub attributes: Vec<(String, String)>,
}

/// Field-level product errors; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub name: Option<&'static str>,
    pub price: Option<&'static str>,
    pub stock: Option<&'static str>,
}

impl ProductFormErrors {
    fn any(&self) -> bool {
        self.name.is_some() || self.price.is_some() || self.stock.is_some()
    }
}

impl ProductForm {
    /// Validate and build the create payload. Attribute rows with neither
    /// a name nor a value are dropped.
    pub fn validate(&self) -> Result<CreateProductPayload, ProductFormErrors> {
        let mut errors = ProductFormErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required");
        }

        let price = match self.price.trim() {
            "" => {
                errors.price = Some("Price is required");
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(value) if value >= 0.0 => Some(value),
                Ok(_) => {
                    errors.price = Some("Price must be zero or more");
                    None
                }
                Err(_) => {
                    errors.price = Some("Price must be a number");
                    None
                }
            },
        };

        let stock = match self.stock.trim() {
            "" => {
                errors.stock = Some("Stock is required");
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.stock = Some("Stock must be a non-negative whole number");
                    None
                }
            },
        };

        match (price, stock) {
            (Some(price), Some(stock)) if !errors.any() => {
                let attributes = self
                    .attributes
                    .iter()
                    .filter(|(name, value)| {
                        !(name.trim().is_empty() && value.trim().is_empty())
                    })
                    .map(|(name, value)| ProductAttributeInput {
                        name: name.trim().to_owned(),
                        value: value.trim().to_owned(),
                    })
                    .collect();
                Ok(CreateProductPayload {
                    name: name.to_owned(),
                    description: self.description.trim().to_owned(),
                    price,
                    stock,
                    attributes,
                })
            }
            _ => Err(errors),
        }
    }
}

// =============================================================================
// ATTRIBUTE
// =============================================================================

/// Raw attribute form fields.
#[derive(Clone, Debug, Default)]
pub struct AttributeForm {
    pub name: String,
    pub kind: AttributeType,
    pub values: Vec<String>,
}

/// Field-level attribute errors; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeFormErrors {
    pub name: Option<&'static str>,
}

impl AttributeForm {
    /// Validate and build the create payload. Values apply only to
    /// `select` attributes; they are trimmed and empties dropped.
    pub fn validate(&self) -> Result<CreateAttributePayload, AttributeFormErrors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AttributeFormErrors {
                name: Some("Name is required"),
            });
        }
        let values = if self.kind == AttributeType::Select {
            self.values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .collect()
        } else {
            Vec::new()
        };
        Ok(CreateAttributePayload {
            name: name.to_owned(),
            kind: self.kind,
            values,
        })
    }
}
