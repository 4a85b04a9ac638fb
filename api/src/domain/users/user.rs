use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// A stored user. `id` is zero until the store assigns one on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub phone_number: String,
    pub email: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("age must be positive, got: {0}")]
    AgeNotPositive(i32),
    #[error("phone number is required")]
    PhoneNumberRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email format: {0}")]
    InvalidEmail(String),
}

impl User {
    // Rules are checked in order; the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let res = if self.name.is_empty() {
            Err(ValidationError::NameRequired)
        } else if self.age <= 0 {
            Err(ValidationError::AgeNotPositive(self.age))
        } else if self.phone_number.is_empty() {
            Err(ValidationError::PhoneNumberRequired)
        } else if self.email.is_empty() {
            Err(ValidationError::EmailRequired)
        } else if !EMAIL_RE.is_match(&self.email) {
            Err(ValidationError::InvalidEmail(self.email.clone()))
        } else {
            Ok(())
        };
        if let Err(e) = &res {
            tracing::debug!(error = %e, "user_validation_failed");
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> User {
        User {
            id: 0,
            name: "John Doe".into(),
            age: 30,
            phone_number: "+1234567890".into(),
            email: "john@example.com".into(),
        }
    }

    #[test]
    fn accepts_well_formed_user() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn accepts_common_email_shapes() {
        for email in [
            "a.b@example.co",
            "first_last+tag@mail.example.org",
            "x%y-z@sub.domain.io",
        ] {
            let user = User {
                email: email.into(),
                ..valid()
            };
            assert_eq!(user.validate(), Ok(()), "{email}");
        }
    }

    #[test]
    fn rejects_missing_name() {
        let user = User {
            name: String::new(),
            ..valid()
        };
        let err = user.validate().unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn rejects_non_positive_age() {
        for age in [0, -1] {
            let user = User { age, ..valid() };
            let err = user.validate().unwrap_err();
            assert_eq!(err.to_string(), format!("age must be positive, got: {age}"));
        }
    }

    #[test]
    fn rejects_missing_phone_number() {
        let user = User {
            phone_number: String::new(),
            ..valid()
        };
        assert_eq!(
            user.validate().unwrap_err().to_string(),
            "phone number is required"
        );
    }

    #[test]
    fn rejects_missing_email() {
        let user = User {
            email: String::new(),
            ..valid()
        };
        assert_eq!(user.validate().unwrap_err().to_string(), "email is required");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in [
            "invalid-email",
            "no-at.example.com",
            "user@nodot",
            "user@example.c",
            "user name@example.com",
            "@example.com",
        ] {
            let user = User {
                email: email.into(),
                ..valid()
            };
            assert_eq!(
                user.validate().unwrap_err(),
                ValidationError::InvalidEmail(email.into()),
                "{email}"
            );
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        let user = User {
            id: 0,
            name: String::new(),
            age: -5,
            phone_number: String::new(),
            email: "bad".into(),
        };
        assert_eq!(user.validate(), Err(ValidationError::NameRequired));

        let user = User {
            name: "Jane".into(),
            ..user
        };
        assert_eq!(user.validate(), Err(ValidationError::AgeNotPositive(-5)));
    }
}
