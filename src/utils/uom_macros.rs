#![warn(missing_docs)]
//! uom macros that facilitate the creation of single lengths or 3D points of lengths
/// helper macro to create the units
///
/// One value creates a single quantity, three values a [`nalgebra::Point3`] of quantities.
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr, $val3:expr) => {
        {
        use nalgebra::Point3;
        Point3::new(
            $unit_type::new::<$unit>($val1),
            $unit_type::new::<$unit>($val2),
            $unit_type::new::<$unit>($val3))
        }
    };
}

///macro to create a Length (or a point of lengths) in meter
#[macro_export]
macro_rules! meter {
    ($( $x:expr ),*) =>{
        {
            use uom::si::{f64::Length, length::meter};
            $crate::uom_unit_creator![meter, Length, $( $x ),*]
        }
    };
}
///macro to create a Length (or a point of lengths) in centimeter
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::centimeter};
        $crate::uom_unit_creator![centimeter, Length, $( $x ),*]
    }};
}
///macro to create a Length (or a point of lengths) in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use uom::si::length::meter;
    #[test]
    fn single_values() {
        assert_eq!(meter!(1.5).get::<meter>(), 1.5);
        assert_eq!(centimeter!(20.0).get::<meter>(), 0.2);
        assert_eq!(millimeter!(5.0).get::<meter>(), 0.005);
    }
    #[test]
    fn points() {
        let p = centimeter!(10.0, -20.0, 30.0);
        assert_eq!(p.x.get::<meter>(), 0.1);
        assert_eq!(p.y.get::<meter>(), -0.2);
        assert_eq!(p.z.get::<meter>(), 0.3);
    }
}
