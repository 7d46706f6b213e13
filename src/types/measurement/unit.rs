pub trait Velocity {}
pub trait Distance {}

macro_rules! units {
    ($($class:ident => ($value:expr, $name:expr, $trait:ty)),+) => {
        $(
            #[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
            pub struct $class;

            impl From<$class> for f32 {
                fn from(_: $class) -> f32 {
                    $value
                }
            }

            impl core::fmt::Display for $class {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    write!(f, $name)
                }
            }

            impl $trait for $class {}
        )+
    };
}

macro_rules! velocity_units {
    ($($class:ident => ($value:expr, $name:literal)),+) => {
        units!{$($class => ($value, $name, Velocity)),+}
    }
}

// Base unit is ft/min, the unit the vertical speed arrives in
velocity_units! {
    FTmin => (1.0, "ft/min"),
    HFTmin => (100.0, "100ft/min")
}

macro_rules! distance_units {
    ($($class:ident => ($value:expr, $name:literal)),+) => {
        units!{$($class => ($value, $name, Distance)),+}
    }
}

// Base unit is feet
distance_units! {
    Feet => (1.0, "ft"),
    FlightLevel => (100.0, "FL")
}

pub type FT = Feet;
pub type FL = FlightLevel;
