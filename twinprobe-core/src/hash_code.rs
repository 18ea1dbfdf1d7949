//! Native 32-bit hash codes for the supported key types
//!
//! The engine reduces a signed hash code modulo the table capacity, so the
//! codes here are deliberately simple and platform independent: the same key
//! always lands in the same slot from one run to the next.

/// A signed 32-bit hash code, stable across runs
///
/// Equal keys must produce equal codes. Distinct keys may collide.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

impl HashCode for i32 {
    #[inline]
    fn hash_code(&self) -> i32 {
        *self
    }
}

/// Folds the high word onto the low word
impl HashCode for i64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        (*self ^ ((*self as u64) >> 32) as i64) as i32
    }
}

/// Polynomial hash `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units
impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_is_identity() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((-7i32).hash_code(), -7);
    }

    #[test]
    fn test_timestamp_folds_high_word() {
        assert_eq!(5i64.hash_code(), 5);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!(1_700_000_000_123i64.hash_code(), -807_048_720);
        assert_eq!((-1i64).hash_code(), 0);
    }

    #[test]
    fn test_text_hash() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!("hello".hash_code(), 99_162_322);
        // Wraps to i32::MIN
        assert_eq!("polygenelubricants".hash_code(), i32::MIN);
        assert_eq!(String::from("hello").hash_code(), "hello".hash_code());
    }
}
