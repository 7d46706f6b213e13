use core::{
    fmt, marker,
    ops::{Add, Div, Mul},
};

/// A scalar quantity tagged with its unit, e.g. `Vector<f32, Feet>`.
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector<T, U> {
    pub raw: T,
    unit: marker::PhantomData<U>,
}

impl<T: Copy, U: Copy> Vector<T, U> {
    pub fn new(value: T, _: U) -> Self {
        Self { raw: value, unit: marker::PhantomData }
    }
}

impl<T: fmt::Display, U: fmt::Display + Default> fmt::Display for Vector<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.raw, U::default())
    }
}

impl<T: PartialEq, U> PartialEq for Vector<T, U> {
    fn eq(&self, rhs: &Self) -> bool {
        self.raw == rhs.raw
    }
}

impl<T: Add<Output = T>, U> Add for Vector<T, U> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { raw: self.raw + other.raw, unit: marker::PhantomData }
    }
}

impl<V, F: Default + Into<V>> Vector<V, F>
where
    V: Mul<Output = V> + Div<Output = V> + Copy,
{
    pub fn u<T: Default + Into<V>>(self, _: T) -> Vector<V, T> {
        let from: V = F::default().into();
        let to: V = T::default().into();
        Vector { raw: self.raw * from / to, unit: marker::PhantomData }
    }
}

impl<T: serde::Serialize, U> serde::Serialize for Vector<T, U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'a, T: serde::Deserialize<'a>, U> serde::Deserialize<'a> for Vector<T, U> {
    fn deserialize<D: serde::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self { raw: T::deserialize(deserializer)?, unit: marker::PhantomData })
    }
}
