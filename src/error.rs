// Copyright (C) 2020-2026 Andy Kurnia.

// Errors that are not gameplay rejections: unreadable word lists, bad
// questions, bad shell input. Rejections live in play_scorer.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MyError({:?})", self.s)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(n: i32) -> Returns<i32> {
        if n < 0 {
            return_error!(format!("negative {}", n));
        }
        Ok(n)
    }

    #[test]
    fn return_error_carries_message() {
        assert_eq!(fails(3).unwrap(), 3);
        assert_eq!(fails(-2).unwrap_err().to_string(), "negative -2");
    }
}
