use core::str::{FromStr, Split};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    UnknownPath,
    ExpectValue,
    InvalidValue,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let err_string = match self {
            Self::UnknownPath => "Specified path not exists or invalid",
            Self::ExpectValue => "Expect value",
            Self::InvalidValue => "Value not valid",
        };
        write!(f, "{}", err_string)
    }
}

/// Right hand side of `path value`, absent when only a path was given
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Value<'a>(pub Option<&'a str>);

impl<'a> Value<'a> {
    pub fn of(string: &'a str) -> Value<'a> {
        Value(Some(string))
    }

    pub fn parse<T: FromStr>(&self) -> Result<T, Error> {
        match self.0 {
            Some(s) => FromStr::from_str(s).map_err(|_| Error::InvalidValue),
            None => Err(Error::ExpectValue),
        }
    }

    /// `none` clears an optional setting
    pub fn parse_option<T: FromStr>(&self) -> Result<Option<T>, Error> {
        match self.0 {
            Some("none") => Ok(None),
            Some(s) => FromStr::from_str(s).map(Some).map_err(|_| Error::InvalidValue),
            None => Err(Error::ExpectValue),
        }
    }
}

/// Dotted path like `altitude.label-interval`
#[derive(Clone, Debug)]
pub struct Path<'a>(Split<'a, char>);

impl<'a> Path<'a> {
    pub fn new(split: Split<'a, char>) -> Self {
        Self(split)
    }

    pub fn str(&mut self) -> Result<&str, Error> {
        self.0.next().ok_or(Error::UnknownPath)
    }
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(path: &'a str) -> Self {
        Self(path.split('.'))
    }
}

pub trait PathSet {
    fn set(&mut self, path: Path, value: Value) -> Result<(), Error>;
}

mod test {
    #[test]
    fn test_value_parse() {
        use super::{Error, Value};

        assert_eq!(Value::of("1.5").parse::<f32>(), Ok(1.5));
        assert_eq!(Value::of("abc").parse::<f32>(), Err(Error::InvalidValue));
        assert_eq!(Value(None).parse::<f32>(), Err(Error::ExpectValue));
        assert_eq!(Value::of("none").parse_option::<f32>(), Ok(None));
        assert_eq!(Value::of("0").parse_option::<f32>(), Ok(Some(0.0)));
    }

    #[test]
    fn test_path_walk() {
        use super::{Error, Path};

        let mut path = Path::from("speed.floor");
        assert_eq!(path.str(), Ok("speed"));
        assert_eq!(path.str(), Ok("floor"));
        assert_eq!(path.str(), Err(Error::UnknownPath));
    }
}
