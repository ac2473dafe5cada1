use std::borrow::Cow;

use kstring::KString;

// `From<&str>` for KString only exists for `&'static str`, hence our
// own conversion trait for the string-ish arguments taken by the
// public API.
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&&str> for KString {
    fn myfrom(s: &&str) -> Self {
        KString::from_ref(*s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}

impl<'t> MyFrom<Cow<'t, str>> for KString {
    fn myfrom(s: Cow<'t, str>) -> Self {
        match s {
            Cow::Borrowed(s) => KString::from_ref(s),
            Cow::Owned(s) => KString::from_string(s),
        }
    }
}

impl MyFrom<char> for KString {
    fn myfrom(c: char) -> Self {
        let mut buf = [0; 4];
        KString::from_ref(c.encode_utf8(&mut buf))
    }
}

macro_rules! myfrom_display {
    ($($t:ty),*) => {
        $(
            impl MyFrom<$t> for KString {
                fn myfrom(val: $t) -> Self {
                    KString::from_string(val.to_string())
                }
            }
        )*
    }
}

myfrom_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

pub fn ks<T>(s: T) -> KString
where KString: MyFrom<T>
{
    KString::myfrom(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_ks() {
        assert_eq!(ks("a"), "a");
        assert_eq!(ks(String::from("b")), "b");
        assert_eq!(ks(Cow::Borrowed("c")), "c");
        assert_eq!(ks('ä'), "ä");
        assert_eq!(ks(-12i32), "-12");
        assert_eq!(ks(2.5f64), "2.5");
        assert_eq!(ks(7usize), "7");
    }
}
