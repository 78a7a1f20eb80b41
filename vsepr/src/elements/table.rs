use super::{BondingFlags, Classification, ElementProperties};
use Classification::*;

const fn row(
    symbol: &'static str,
    radius: f64,
    electronegativity: Option<f64>,
    ionization_energy: Option<f64>,
    electron_affinity: Option<f64>,
    color: &'static str,
    orbitals: &'static [&'static str],
    atomic_radius: f64,
    flags: (bool, bool),
    classification: Classification,
    atomic_number: u8,
) -> ElementProperties {
    ElementProperties {
        symbol,
        atomic_number,
        radius,
        electronegativity,
        ionization_energy,
        electron_affinity,
        color,
        orbitals,
        atomic_radius,
        bonding: BondingFlags {
            multiple_bonds: flags.0,
            variable_valence: flags.1,
        },
        classification,
    }
}

// (symbol, radius, EN, IE1 [eV], EA [eV], colour, occupied subshells,
//  atomic radius, bonding flags, class, Z)
#[rustfmt::skip]
pub(super) static ELEMENTS: [ElementProperties; 118] = [
    row("H", 1.2, Some(2.2), Some(13.6), Some(0.75), "#B0BEC5", &["1s"], 0.53, (false, false), Nonmetal, 1),
    row("He", 1.4, None, Some(24.6), None, "#D9FFFF", &["1s"], 0.31, (false, false), Nonmetal, 2),
    row("Li", 1.82, Some(0.98), Some(5.39), Some(0.62), "#CC80FF", &["1s", "2s"], 1.52, (false, false), Metal, 3),
    row("Be", 1.53, Some(1.57), Some(9.32), Some(0.0), "#C2FF00", &["1s", "2s"], 1.12, (false, false), Metal, 4),
    row("B", 1.92, Some(2.04), Some(8.3), Some(0.28), "#FFB5B5", &["1s", "2s", "2p"], 0.87, (false, false), Metalloid, 5),
    row("C", 1.7, Some(2.55), Some(11.26), Some(1.26), "#222222", &["1s", "2s", "2p"], 0.68, (true, true), Nonmetal, 6),
    row("N", 1.55, Some(3.04), Some(14.53), Some(-0.07), "#1976D2", &["1s", "2s", "2p"], 0.56, (true, true), Nonmetal, 7),
    row("O", 1.52, Some(3.44), Some(13.62), Some(1.46), "#EF5350", &["1s", "2s", "2p"], 0.48, (true, true), Nonmetal, 8),
    row("F", 1.47, Some(3.98), Some(17.42), Some(3.4), "#43A047", &["1s", "2s", "2p"], 0.42, (true, true), Nonmetal, 9),
    row("Ne", 1.54, None, Some(21.56), None, "#B3E3F5", &["1s", "2s", "2p"], 0.38, (false, false), Nonmetal, 10),
    row("Na", 2.27, Some(0.93), Some(5.14), Some(0.55), "#AB5CF2", &["1s", "2s", "2p", "3s"], 1.86, (false, false), Metal, 11),
    row("Mg", 1.73, Some(1.31), Some(7.65), Some(0.0), "#8AFF00", &["1s", "2s", "2p", "3s"], 1.6, (false, false), Metal, 12),
    row("Al", 1.84, Some(1.61), Some(5.99), Some(0.44), "#BFA6A6", &["1s", "2s", "2p", "3s", "3p"], 1.43, (false, false), Metal, 13),
    row("Si", 2.1, Some(1.9), Some(8.15), Some(1.39), "#F0C8A0", &["1s", "2s", "2p", "3s", "3p"], 1.17, (false, false), Metalloid, 14),
    row("P", 1.8, Some(2.19), Some(10.49), Some(0.75), "#FF8000", &["1s", "2s", "2p", "3s", "3p"], 1.1, (true, true), Nonmetal, 15),
    row("S", 1.8, Some(2.58), Some(10.36), Some(2.08), "#FDD835", &["1s", "2s", "2p", "3s", "3p"], 1.04, (true, true), Nonmetal, 16),
    row("Cl", 1.75, Some(3.16), Some(12.97), Some(3.61), "#26A69A", &["1s", "2s", "2p", "3s", "3p"], 0.99, (true, true), Nonmetal, 17),
    row("Ar", 1.88, None, Some(15.76), None, "#80D1E3", &["1s", "2s", "2p", "3s", "3p"], 0.71, (false, false), Nonmetal, 18),
    row("K", 2.75, Some(0.82), Some(4.34), Some(0.5), "#8F40D4", &["1s", "2s", "2p", "3s", "3p", "4s"], 2.27, (false, false), Metal, 19),
    row("Ca", 2.31, Some(1.0), Some(6.11), Some(0.0), "#3DFF00", &["1s", "2s", "2p", "3s", "3p", "4s"], 1.97, (false, false), Metal, 20),
    row("Sc", 2.3, Some(1.36), Some(6.56), Some(0.19), "#E6E6E6", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.62, (false, true), TransitionMetal, 21),
    row("Ti", 2.15, Some(1.54), Some(6.82), Some(0.08), "#BFC2C7", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.47, (false, true), TransitionMetal, 22),
    row("V", 2.05, Some(1.63), Some(6.74), Some(0.53), "#A6A6AB", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.34, (false, true), TransitionMetal, 23),
    row("Cr", 2.05, Some(1.66), Some(6.77), Some(0.68), "#8A99C7", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.28, (false, true), TransitionMetal, 24),
    row("Mn", 2.05, Some(1.55), Some(7.43), Some(0.0), "#9C7AC7", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.27, (false, true), TransitionMetal, 25),
    row("Fe", 2.0, Some(1.83), Some(7.87), Some(0.15), "#E06633", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.26, (false, true), TransitionMetal, 26),
    row("Co", 2.0, Some(1.88), Some(7.86), Some(0.66), "#F090A0", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.25, (false, true), TransitionMetal, 27),
    row("Ni", 1.97, Some(1.91), Some(7.64), Some(1.16), "#50D050", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.24, (false, true), TransitionMetal, 28),
    row("Cu", 1.96, Some(1.9), Some(7.73), Some(1.24), "#C88033", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.28, (false, true), TransitionMetal, 29),
    row("Zn", 2.01, Some(1.65), Some(9.39), Some(0.0), "#7D80B0", &["1s", "2s", "2p", "3s", "3p", "4s", "3d"], 1.34, (false, true), TransitionMetal, 30),
    row("Ga", 1.87, Some(1.81), Some(5.99), Some(0.3), "#C28F8F", &["1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p"], 1.35, (false, false), Metal, 31),
    row("Ge", 2.11, Some(2.01), Some(7.9), Some(1.23), "#668F8F", &["1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p"], 1.22, (false, false), Metalloid, 32),
    row("As", 1.85, Some(2.18), Some(9.81), Some(0.81), "#BD80E3", &["1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p"], 1.19, (true, true), Metalloid, 33),
    row("Se", 1.9, Some(2.55), Some(9.75), Some(2.02), "#FFA100", &["1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p"], 1.16, (true, true), Nonmetal, 34),
    row("Br", 1.85, Some(2.96), Some(11.81), Some(3.36), "#A1887F", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p"], 1.14, (true, true), Nonmetal, 35),
    row("Kr", 2.02, Some(3.0), Some(14.0), Some(0.0), "#5CB8D1", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p"], 1.12, (false, false), Nonmetal, 36),
    row("Rb", 3.03, Some(0.82), Some(4.18), Some(0.47), "#702EB0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s"], 2.48, (false, false), Metal, 37),
    row("Sr", 2.49, Some(0.95), Some(5.69), Some(0.0), "#00FF00", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s"], 2.15, (false, false), Metal, 38),
    row("Y", 2.36, Some(1.22), Some(6.38), Some(0.31), "#94FFFF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.8, (false, true), TransitionMetal, 39),
    row("Zr", 2.23, Some(1.33), Some(6.84), Some(0.43), "#94E0E0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.6, (false, true), TransitionMetal, 40),
    row("Nb", 2.18, Some(1.6), Some(6.88), Some(0.92), "#73C2C9", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.46, (false, true), TransitionMetal, 41),
    row("Mo", 2.17, Some(2.16), Some(7.1), Some(0.75), "#54B5B5", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.39, (false, true), TransitionMetal, 42),
    row("Tc", 2.16, Some(1.9), Some(7.28), Some(0.55), "#3B9E9C", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.36, (false, true), TransitionMetal, 43),
    row("Ru", 2.13, Some(2.2), Some(7.36), Some(1.05), "#248F8F", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.34, (false, true), TransitionMetal, 44),
    row("Rh", 2.1, Some(2.28), Some(7.46), Some(1.14), "#0A7D8C", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.34, (false, true), TransitionMetal, 45),
    row("Pd", 2.1, Some(2.2), Some(8.34), Some(0.56), "#006985", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.37, (false, true), TransitionMetal, 46),
    row("Ag", 1.72, Some(1.93), Some(7.58), Some(1.3), "#C0C0C0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.44, (false, true), TransitionMetal, 47),
    row("Cd", 1.58, Some(1.69), Some(8.99), Some(0.0), "#FFD98F", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d"], 1.51, (false, true), TransitionMetal, 48),
    row("In", 1.93, Some(1.78), Some(5.79), Some(0.3), "#A67573", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.67, (false, false), Metal, 49),
    row("Sn", 2.17, Some(1.96), Some(7.34), Some(1.11), "#668080", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.58, (false, false), Metal, 50),
    row("Sb", 2.06, Some(2.05), Some(8.61), Some(1.05), "#9E63B5", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.45, (true, true), Metalloid, 51),
    row("Te", 2.06, Some(2.1), Some(9.01), Some(1.97), "#D47A00", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.4, (true, true), Metalloid, 52),
    row("I", 1.98, Some(2.66), Some(10.45), Some(3.06), "#8E24AA", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.33, (true, true), Nonmetal, 53),
    row("Xe", 2.16, Some(2.6), Some(12.13), Some(0.0), "#429EB0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p"], 1.08, (false, false), Nonmetal, 54),
    row("Cs", 3.43, Some(0.79), Some(3.89), Some(0.47), "#57178F", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s"], 2.65, (false, false), Metal, 55),
    row("Ba", 2.68, Some(0.89), Some(5.21), Some(0.0), "#00C900", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s"], 2.22, (false, false), Metal, 56),
    row("La", 2.5, Some(1.1), Some(5.58), Some(0.47), "#70D4FF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "5d"], 1.87, (false, true), Lanthanide, 57),
    row("Ce", 2.48, Some(1.12), Some(5.47), Some(0.5), "#FFFFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.83, (false, true), Lanthanide, 58),
    row("Pr", 2.47, Some(1.13), Some(5.42), Some(0.5), "#D9FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.82, (false, true), Lanthanide, 59),
    row("Nd", 2.45, Some(1.14), Some(5.53), Some(0.5), "#C7FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.81, (false, true), Lanthanide, 60),
    row("Pm", 2.43, Some(1.13), Some(5.55), Some(0.5), "#A3FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.8, (false, true), Lanthanide, 61),
    row("Sm", 2.42, Some(1.17), Some(5.64), Some(0.5), "#8FFFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.8, (false, true), Lanthanide, 62),
    row("Eu", 2.4, Some(1.2), Some(5.67), Some(0.5), "#61FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.99, (false, true), Lanthanide, 63),
    row("Gd", 2.38, Some(1.2), Some(6.14), Some(0.5), "#45FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.79, (false, true), Lanthanide, 64),
    row("Tb", 2.37, Some(1.2), Some(5.86), Some(0.5), "#30FFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.76, (false, true), Lanthanide, 65),
    row("Dy", 2.35, Some(1.22), Some(5.94), Some(0.5), "#1FFFC7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.75, (false, true), Lanthanide, 66),
    row("Ho", 2.33, Some(1.23), Some(6.02), Some(0.5), "#00FF9C", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.74, (false, true), Lanthanide, 67),
    row("Er", 2.32, Some(1.24), Some(6.1), Some(0.5), "#00E675", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.73, (false, true), Lanthanide, 68),
    row("Tm", 2.3, Some(1.25), Some(6.18), Some(0.5), "#00D452", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.72, (false, true), Lanthanide, 69),
    row("Yb", 2.28, Some(1.1), Some(6.25), Some(0.5), "#00BF38", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f"], 1.94, (false, true), Lanthanide, 70),
    row("Lu", 2.27, Some(1.27), Some(5.43), Some(0.5), "#00AB24", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.72, (false, true), Lanthanide, 71),
    row("Hf", 2.25, Some(1.3), Some(6.65), Some(0.0), "#4DC2FF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.59, (false, true), TransitionMetal, 72),
    row("Ta", 2.2, Some(1.5), Some(7.89), Some(0.31), "#4DA6FF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.46, (false, true), TransitionMetal, 73),
    row("W", 2.18, Some(2.36), Some(7.98), Some(0.82), "#2194D6", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.39, (false, true), TransitionMetal, 74),
    row("Re", 2.17, Some(1.9), Some(7.88), Some(0.15), "#267DAB", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.37, (false, true), TransitionMetal, 75),
    row("Os", 2.16, Some(2.2), Some(8.44), Some(1.1), "#266696", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.35, (false, true), TransitionMetal, 76),
    row("Ir", 2.13, Some(2.2), Some(8.97), Some(1.57), "#175487", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.36, (false, true), TransitionMetal, 77),
    row("Pt", 2.13, Some(2.28), Some(8.96), Some(2.13), "#D0D0E0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.39, (false, true), TransitionMetal, 78),
    row("Au", 2.14, Some(2.54), Some(9.23), Some(2.31), "#FFD123", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d"], 1.44, (false, true), TransitionMetal, 79),
    row("Hg", 1.55, Some(2.0), Some(10.44), Some(0.0), "#B8B8D0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "4d", "5s", "5p", "5d", "6s"], 1.6, (false, false), Metal, 80),
    row("Tl", 1.96, Some(1.62), Some(6.11), Some(0.2), "#A6544D", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.71, (false, false), Metal, 81),
    row("Pb", 2.02, Some(2.33), Some(7.42), Some(0.0), "#575961", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.75, (false, false), Metal, 82),
    row("Bi", 2.07, Some(2.02), Some(7.29), Some(0.94), "#9E4FB5", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.7, (true, true), Metal, 83),
    row("Po", 1.97, Some(2.0), Some(8.42), Some(1.9), "#AB5C00", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.68, (true, true), Metalloid, 84),
    row("At", 2.02, Some(2.2), Some(9.65), Some(2.8), "#754F45", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.43, (true, true), Metalloid, 85),
    row("Rn", 2.45, None, Some(10.75), Some(0.0), "#428296", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p"], 1.2, (false, false), Nonmetal, 86),
    row("Fr", 3.5, Some(0.7), Some(4.07), Some(0.0), "#420066", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s"], 3.1, (false, false), Metal, 87),
    row("Ra", 2.83, Some(0.9), Some(5.28), Some(0.0), "#007D00", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s"], 2.15, (false, false), Metal, 88),
    row("Ac", 2.65, Some(1.1), Some(5.17), Some(0.0), "#70ABFA", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s"], 1.95, (false, true), Actinide, 89),
    row("Th", 2.5, Some(1.3), Some(6.31), Some(0.0), "#00BAFF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.8, (false, true), Actinide, 90),
    row("Pa", 2.4, Some(1.5), Some(5.89), Some(0.0), "#00A1FF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.61, (false, true), Actinide, 91),
    row("U", 1.86, Some(1.38), Some(6.08), Some(0.0), "#008FFF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.58, (false, true), Actinide, 92),
    row("Np", 2.25, Some(1.36), Some(6.27), Some(0.0), "#0080FF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.55, (false, true), Actinide, 93),
    row("Pu", 2.2, Some(1.28), Some(6.03), Some(0.0), "#006BFF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.59, (false, true), Actinide, 94),
    row("Am", 2.15, Some(1.13), Some(6.0), Some(0.0), "#545CF2", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.73, (false, true), Actinide, 95),
    row("Cm", 2.1, Some(1.28), Some(6.02), Some(0.0), "#785CE3", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.74, (false, true), Actinide, 96),
    row("Bk", 2.05, Some(1.3), Some(6.23), Some(0.0), "#8A4FE3", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.75, (false, true), Actinide, 97),
    row("Cf", 2.0, Some(1.3), Some(6.3), Some(0.0), "#A136D4", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.76, (false, true), Actinide, 98),
    row("Es", 1.95, Some(1.3), Some(6.42), Some(0.0), "#B31FD4", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.77, (false, true), Actinide, 99),
    row("Fm", 1.9, Some(1.3), Some(6.5), Some(0.0), "#B31FBA", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.78, (false, true), Actinide, 100),
    row("Md", 1.85, Some(1.3), Some(6.58), Some(0.0), "#B30DA6", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.79, (false, true), Actinide, 101),
    row("No", 1.8, Some(1.3), Some(6.65), Some(0.0), "#BD0D87", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f"], 1.8, (false, true), Actinide, 102),
    row("Lr", 1.75, Some(1.3), Some(6.79), Some(0.0), "#C70066", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.82, (false, true), Actinide, 103),
    row("Rf", 1.7, None, None, None, "#D9D9D9", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.6, (false, true), TransitionMetal, 104),
    row("Db", 1.65, None, None, None, "#C7C7C7", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.59, (false, true), TransitionMetal, 105),
    row("Sg", 1.6, None, None, None, "#B0B0B0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.58, (false, true), TransitionMetal, 106),
    row("Bh", 1.55, None, None, None, "#A0A0A0", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.57, (false, true), TransitionMetal, 107),
    row("Hs", 1.5, None, None, None, "#909090", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.56, (false, true), TransitionMetal, 108),
    row("Mt", 1.45, None, None, None, "#808080", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.55, (false, true), TransitionMetal, 109),
    row("Ds", 1.4, None, None, None, "#707070", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.54, (false, true), TransitionMetal, 110),
    row("Rg", 1.35, None, None, None, "#606060", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.53, (false, true), TransitionMetal, 111),
    row("Cn", 1.3, None, None, None, "#505050", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d"], 1.52, (false, false), Metal, 112),
    row("Nh", 1.25, None, None, None, "#404040", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.51, (false, false), Metal, 113),
    row("Fl", 1.2, None, None, None, "#303030", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.5, (false, false), Metal, 114),
    row("Mc", 1.15, None, None, None, "#202020", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.49, (false, false), Metal, 115),
    row("Lv", 1.1, None, None, None, "#101010", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.48, (false, false), Metal, 116),
    row("Ts", 1.05, None, None, None, "#3B9E3B", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.47, (true, false), Metalloid, 117),
    row("Og", 1.0, None, None, None, "#FFFFFF", &["1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p", "7s", "5f", "6d", "7p"], 1.46, (false, false), Nonmetal, 118),
];
