use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Mass flux, kg/m²·s in SI.
pub type MassFlux = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
