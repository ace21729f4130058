//! Compiled-in AGA8-92DC detail characterization data (AGA Report No. 8, 1992).
//!
//! Component rows and binary pairs are listed in [`Component`] order.

use crate::component::Component::{self, *};
use crate::table::{BinaryParams, ComponentParams, NUM_COMPONENTS, NUM_TERMS, TermCoeffs};

#[allow(clippy::too_many_arguments)]
const fn comp(
    molar_mass: f64,
    energy: f64,
    size: f64,
    orientation: f64,
    quadrupole: f64,
    high_temperature: f64,
    dipole: f64,
    association: f64,
) -> ComponentParams {
    ComponentParams {
        molar_mass,
        energy,
        size,
        orientation,
        quadrupole,
        high_temperature,
        dipole,
        association,
    }
}

#[allow(clippy::too_many_arguments)]
const fn term(
    a: f64,
    b: f64,
    c: f64,
    k: f64,
    u: f64,
    g: f64,
    q: f64,
    f: f64,
    s: f64,
    w: f64,
) -> TermCoeffs {
    TermCoeffs {
        a,
        b,
        c,
        k,
        u,
        g,
        q,
        f,
        s,
        w,
    }
}

#[rustfmt::skip]
pub(crate) const COMPONENTS: [ComponentParams; NUM_COMPONENTS] = [
    //    M          E           K          G         Q         F    S       W
    comp(16.043,   151.3183,   0.4619255, 0.0,      0.0,      0.0, 0.0,    0.0), // CH4
    comp(28.0135,  99.73778,   0.4479153, 0.027815, 0.0,      0.0, 0.0,    0.0), // N2
    comp(44.010,   241.9606,   0.4557489, 0.189065, 0.69,     0.0, 0.0,    0.0), // CO2
    comp(30.070,   244.1667,   0.5279209, 0.0793,   0.0,      0.0, 0.0,    0.0), // C2H6
    comp(44.097,   298.1183,   0.5837490, 0.141239, 0.0,      0.0, 0.0,    0.0), // C3H8
    comp(18.0153,  514.0156,   0.3825868, 0.3325,   1.06775,  0.0, 1.5822, 1.0), // H2O
    comp(34.082,   296.3550,   0.4618263, 0.0885,   0.633276, 0.0, 0.39,   0.0), // H2S
    comp(2.0159,   26.95794,   0.3514916, 0.034369, 0.0,      1.0, 0.0,    0.0), // H2
    comp(28.010,   105.5348,   0.4533894, 0.038953, 0.0,      0.0, 0.0,    0.0), // CO
    comp(31.9988,  122.7667,   0.4186954, 0.021,    0.0,      0.0, 0.0,    0.0), // O2
    comp(58.123,   324.0689,   0.6406937, 0.256692, 0.0,      0.0, 0.0,    0.0), // i-C4H10
    comp(58.123,   337.6389,   0.6341423, 0.281835, 0.0,      0.0, 0.0,    0.0), // n-C4H10
    comp(72.150,   365.5999,   0.6738577, 0.332267, 0.0,      0.0, 0.0,    0.0), // i-C5H12
    comp(72.150,   370.6823,   0.6798307, 0.366911, 0.0,      0.0, 0.0,    0.0), // n-C5H12
    comp(86.177,   402.636293, 0.7175118, 0.289731, 0.0,      0.0, 0.0,    0.0), // n-C6H14
    comp(100.204,  427.72263,  0.7525189, 0.337542, 0.0,      0.0, 0.0,    0.0), // n-C7H16
    comp(114.231,  450.325022, 0.7849550, 0.383381, 0.0,      0.0, 0.0,    0.0), // n-C8H18
    comp(128.258,  470.840891, 0.8152731, 0.427354, 0.0,      0.0, 0.0,    0.0), // n-C9H20
    comp(142.285,  489.558373, 0.8437826, 0.469659, 0.0,      0.0, 0.0,    0.0), // n-C10H22
    comp(4.0026,   2.610111,   0.3589888, 0.0,      0.0,      0.0, 0.0,    0.0), // He
    comp(39.948,   119.6299,   0.4216551, 0.0,      0.0,      0.0, 0.0,    0.0), // Ar
];

#[rustfmt::skip]
pub(crate) const TERMS: [TermCoeffs; NUM_TERMS] = [
    //    a                b    c    k    u      g    q    f    s    w
    term( 0.1538326,       1.0, 0.0, 0.0,  0.0,  0.0, 0.0, 0.0, 0.0, 0.0), // 1
    term( 1.341953,        1.0, 0.0, 0.0,  0.5,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-2.998583,        1.0, 0.0, 0.0,  1.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.04831228,      1.0, 0.0, 0.0,  3.5,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.3757965,       1.0, 0.0, 0.0, -0.5,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-1.589575,        1.0, 0.0, 0.0,  4.5,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.05358847,      1.0, 0.0, 0.0,  0.5,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 0.88659463,      1.0, 0.0, 0.0,  7.5,  0.0, 0.0, 0.0, 1.0, 0.0),
    term(-0.71023704,      1.0, 0.0, 0.0,  9.5,  0.0, 0.0, 0.0, 1.0, 0.0),
    term(-1.471722,        1.0, 0.0, 0.0,  6.0,  0.0, 0.0, 0.0, 0.0, 1.0), // 10
    term( 1.32185035,      1.0, 0.0, 0.0, 12.0,  0.0, 0.0, 0.0, 0.0, 1.0),
    term(-0.78665925,      1.0, 0.0, 0.0, 12.5,  0.0, 0.0, 0.0, 0.0, 1.0),
    term( 2.29129e-9,      1.0, 1.0, 3.0, -6.0,  0.0, 0.0, 1.0, 0.0, 0.0),
    term( 0.1576724,       1.0, 1.0, 2.0,  2.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.4363864,       1.0, 1.0, 2.0,  3.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.04408159,      1.0, 1.0, 2.0,  2.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term(-0.003433888,     1.0, 1.0, 4.0,  2.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.03205905,      1.0, 1.0, 4.0, 11.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.02487355,      2.0, 0.0, 0.0, -0.5,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.07332279,      2.0, 0.0, 0.0,  0.5,  0.0, 0.0, 0.0, 0.0, 0.0), // 20
    term(-0.001600573,     2.0, 1.0, 2.0,  0.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.6424706,       2.0, 1.0, 2.0,  4.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.4162601,       2.0, 1.0, 2.0,  6.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.06689957,      2.0, 1.0, 4.0, 21.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.2791795,       2.0, 1.0, 4.0, 23.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.6966051,       2.0, 1.0, 4.0, 22.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term(-0.002860589,     2.0, 1.0, 4.0, -1.0,  0.0, 0.0, 1.0, 0.0, 0.0),
    term(-0.008098836,     3.0, 0.0, 0.0, -0.5,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 3.150547,        3.0, 1.0, 1.0,  7.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.007224479,     3.0, 1.0, 1.0, -1.0,  0.0, 0.0, 1.0, 0.0, 0.0), // 30
    term(-0.7057529,       3.0, 1.0, 2.0,  6.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.5349792,       3.0, 1.0, 2.0,  4.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.07931491,      3.0, 1.0, 3.0,  1.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-1.418465,        3.0, 1.0, 3.0,  9.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-5.99905e-17,     3.0, 1.0, 4.0, -13.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    term( 0.1058402,       3.0, 1.0, 4.0, 21.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.03431729,      3.0, 1.0, 4.0,  8.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term(-0.007022847,     4.0, 0.0, 0.0, -0.5,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.02495587,      4.0, 0.0, 0.0,  0.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.04296818,      4.0, 1.0, 2.0,  2.0,  0.0, 0.0, 0.0, 0.0, 0.0), // 40
    term( 0.7465453,       4.0, 1.0, 2.0,  7.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.2919613,       4.0, 1.0, 2.0,  9.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 7.294616,        4.0, 1.0, 4.0, 22.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-9.936757,        4.0, 1.0, 4.0, 23.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.005399808,     5.0, 0.0, 0.0,  1.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.2432567,       5.0, 1.0, 2.0,  9.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.04987016,      5.0, 1.0, 2.0,  3.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 0.003733797,     5.0, 1.0, 4.0,  8.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 1.874951,        5.0, 1.0, 4.0, 23.0,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 0.002168144,     6.0, 0.0, 0.0,  1.5,  0.0, 0.0, 0.0, 0.0, 0.0), // 50
    term(-0.6587164,       6.0, 1.0, 2.0,  5.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.000205518,     7.0, 0.0, 0.0, -0.5,  0.0, 1.0, 0.0, 0.0, 0.0),
    term( 0.009776195,     7.0, 1.0, 2.0,  4.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.02048708,      8.0, 1.0, 1.0,  7.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.01557322,      8.0, 1.0, 2.0,  3.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.006862415,     8.0, 1.0, 2.0,  0.0,  1.0, 0.0, 0.0, 0.0, 0.0),
    term(-0.001226752,     9.0, 1.0, 2.0,  1.0,  0.0, 0.0, 0.0, 0.0, 0.0),
    term( 0.002850908,     9.0, 1.0, 2.0,  0.0,  0.0, 1.0, 0.0, 0.0, 0.0), // 58
];

/// Non-default binary pairs: (i, j, E*ij, Uij, Kij, G*ij). Unlisted pairs are 1.
#[rustfmt::skip]
const BINARY_PAIRS: &[(Component, Component, f64, f64, f64, f64)] = &[
    (CH4, N2,         0.971640, 0.886106, 1.003630, 1.0),
    (CH4, CO2,        0.960644, 0.963827, 0.995933, 0.807653),
    (CH4, Propane,    0.994635, 0.990877, 1.007619, 1.0),
    (CH4, H2O,        0.708218, 1.0,      1.0,      1.0),
    (CH4, H2S,        0.931484, 0.736833, 1.000080, 1.0),
    (CH4, H2,         1.170520, 1.156390, 1.023260, 1.957310),
    (CH4, CO,         0.990126, 1.0,      1.0,      1.0),
    (CH4, Isobutane,  1.019530, 1.0,      1.0,      1.0),
    (CH4, NButane,    0.989844, 0.992291, 0.997596, 1.0),
    (CH4, Isopentane, 1.002350, 1.0,      1.0,      1.0),
    (CH4, NPentane,   0.999268, 1.0,      1.002529, 1.0),
    (CH4, NHexane,    1.107274, 1.0,      0.982962, 1.0),
    (CH4, NHeptane,   0.880880, 1.0,      1.0,      1.0),
    (CH4, NOctane,    0.880973, 1.0,      1.0,      1.0),
    (CH4, NNonane,    0.881067, 1.0,      1.0,      1.0),
    (CH4, NDecane,    0.881161, 1.0,      1.0,      1.0),
    (N2,  CO2,        1.022740, 0.835058, 0.982361, 0.982746),
    (N2,  Ethane,     0.970120, 0.816431, 1.007960, 1.0),
    (N2,  Propane,    0.945939, 0.915502, 1.0,      1.0),
    (N2,  H2O,        0.746954, 1.0,      1.0,      1.0),
    (N2,  H2S,        0.902271, 1.0,      1.0,      1.0),
    (N2,  H2,         1.086320, 0.408838, 1.032270, 1.0),
    (N2,  CO,         1.005710, 1.0,      1.0,      1.0),
    (N2,  O2,         1.021000, 1.0,      1.0,      1.0),
    (N2,  Isobutane,  0.946914, 1.0,      1.0,      1.0),
    (N2,  NButane,    0.973384, 0.993556, 1.0,      1.0),
    (N2,  Isopentane, 0.959340, 1.0,      1.0,      1.0),
    (N2,  NPentane,   0.945520, 1.0,      1.0,      1.0),
    (CO2, Ethane,     0.925053, 0.969870, 1.008510, 0.370296),
    (CO2, Propane,    0.960237, 1.0,      1.0,      1.0),
    (CO2, H2O,        0.849408, 1.0,      1.0,      1.673090),
    (CO2, H2S,        0.955052, 1.045290, 1.007790, 1.0),
    (CO2, H2,         1.281790, 1.0,      1.0,      1.0),
    (CO2, CO,         1.500000, 0.900000, 1.0,      1.0),
    (CO2, Isobutane,  0.906849, 1.0,      1.0,      1.0),
    (CO2, NButane,    0.897362, 1.0,      1.0,      1.0),
    (CO2, Isopentane, 0.726255, 1.0,      1.0,      1.0),
    (CO2, NPentane,   0.859764, 1.0,      1.0,      1.0),
    (CO2, NHexane,    0.855134, 1.0,      1.0,      1.0),
    (CO2, NHeptane,   0.831229, 1.0,      1.0,      1.0),
    (CO2, NOctane,    0.808310, 1.0,      1.0,      1.0),
    (CO2, NNonane,    0.786323, 1.0,      1.0,      1.0),
    (CO2, NDecane,    0.765171, 1.0,      1.0,      1.0),
    (Ethane, Propane, 1.022560, 1.065173, 0.986893, 1.0),
    (Ethane, H2O,     0.693168, 1.0,      1.0,      1.0),
    (Ethane, H2S,     0.946871, 0.971926, 0.999969, 1.0),
    (Ethane, H2,      1.164460, 1.616660, 1.020340, 1.0),
    (Ethane, NButane, 1.013060, 1.0,      1.0,      1.0),
    (Ethane, NPentane, 1.005320, 1.0,     1.0,      1.0),
    (Propane, H2,     1.034787, 1.0,      1.0,      1.0),
    (Propane, NButane, 1.004900, 1.0,     1.0,      1.0),
    (H2S, NHexane,    1.008692, 1.0,      1.0,      1.0),
    (H2S, NHeptane,   1.010126, 1.0,      1.0,      1.0),
    (H2S, NOctane,    1.011501, 1.0,      1.0,      1.0),
    (H2S, NNonane,    1.012821, 1.0,      1.0,      1.0),
    (H2S, NDecane,    1.014089, 1.0,      1.0,      1.0),
    (H2,  CO,         1.100000, 1.0,      1.0,      1.0),
    (H2,  Isobutane,  1.300000, 1.0,      1.0,      1.0),
    (H2,  NButane,    1.300000, 1.0,      1.0,      1.0),
];

pub(crate) fn binary_params() -> BinaryParams {
    let mut binary = BinaryParams::identity();
    for &(i, j, energy, conformal, size, orientation) in BINARY_PAIRS {
        binary.set_pair(i, j, energy, conformal, size, orientation);
    }
    binary
}
