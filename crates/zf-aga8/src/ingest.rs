//! Coefficient ingestion from MATLAB-style matrix text.
//!
//! Accepts assignments such as
//!
//! ```text
//! % binary energy interaction
//! Ex = [1, 0.97164, 0.960644; 0.97164 1 1.02274; ...];
//! ```
//!
//! `%` starts a comment running to end of line, newlines are whitespace, `;`
//! separates rows and values are separated by commas or whitespace. This is
//! an offline data-preparation path; the solver always receives an already
//! validated [`CoefficientTable`].

use crate::error::{Aga8Error, Aga8Result};
use crate::table::{
    BinaryParams, CoefficientTable, ComponentParams, NUM_COMPONENTS, NUM_TERMS, PairMatrix,
    TermCoeffs,
};

/// One `name = [...]` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMatrix {
    pub name: String,
    pub rows: Vec<Vec<f64>>,
}

impl NamedMatrix {
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    /// Entries of a row or column vector, in order.
    pub fn as_vector(&self) -> Option<Vec<f64>> {
        match self.shape() {
            (1, _) => Some(self.rows[0].clone()),
            (_, 1) => Some(self.rows.iter().map(|r| r[0]).collect()),
            _ => None,
        }
    }
}

/// Parse every `name = [...];` assignment in `source`.
///
/// Ragged rows and unparsable numbers are errors; empty matrices are skipped.
pub fn parse_matrices(source: &str) -> Aga8Result<Vec<NamedMatrix>> {
    let text: String = source
        .lines()
        .map(|line| line.split('%').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ");

    let mut matrices = Vec::new();
    let mut rest = text.as_str();
    while let Some(eq) = rest.find('=') {
        let name = rest[..eq]
            .trim_end()
            .rsplit(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or("")
            .trim();
        let after = &rest[eq + 1..];
        let Some(open) = after.find('[') else {
            break;
        };
        if !after[..open].trim().is_empty() {
            return Err(Aga8Error::table(format!(
                "expected '[' after '{name} ='"
            )));
        }
        let body_start = &after[open + 1..];
        let close = body_start
            .find(']')
            .ok_or_else(|| Aga8Error::table(format!("matrix '{name}' is missing ']'")))?;
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(Aga8Error::table(format!("invalid matrix name '{name}'")));
        }

        let rows = parse_rows(name, &body_start[..close])?;
        if !rows.is_empty() {
            matrices.push(NamedMatrix {
                name: name.to_string(),
                rows,
            });
        }
        rest = &body_start[close + 1..];
    }
    Ok(matrices)
}

fn parse_rows(name: &str, body: &str) -> Aga8Result<Vec<Vec<f64>>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for row in body.split(';') {
        let values = row
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>().map_err(|_| {
                    Aga8Error::table(format!("matrix '{name}': cannot parse '{s}' as a number"))
                })
            })
            .collect::<Aga8Result<Vec<f64>>>()?;
        if values.is_empty() {
            continue;
        }
        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(Aga8Error::table(format!(
                    "matrix '{name}' has rows of different lengths ({} and {})",
                    first.len(),
                    values.len()
                )));
            }
        }
        rows.push(values);
    }
    Ok(rows)
}

struct Lookup<'a> {
    matrices: &'a [NamedMatrix],
}

impl Lookup<'_> {
    fn get(&self, name: &str) -> Aga8Result<&NamedMatrix> {
        self.matrices
            .iter()
            .rev()
            .find(|m| m.name == name)
            .ok_or_else(|| Aga8Error::table(format!("missing matrix '{name}'")))
    }

    fn vector<const N: usize>(&self, name: &str) -> Aga8Result<[f64; N]> {
        let m = self.get(name)?;
        let values = m.as_vector().ok_or_else(|| {
            let (r, c) = m.shape();
            Aga8Error::table(format!("'{name}' must be a vector, got {r}x{c}"))
        })?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| Aga8Error::table(format!("'{name}' must have {N} entries, got {len}")))
    }

    fn square(&self, name: &str) -> Aga8Result<PairMatrix> {
        let m = self.get(name)?;
        let (r, c) = m.shape();
        if (r, c) != (NUM_COMPONENTS, NUM_COMPONENTS) {
            return Err(Aga8Error::table(format!(
                "'{name}' must be {NUM_COMPONENTS}x{NUM_COMPONENTS}, got {r}x{c}"
            )));
        }
        let mut out = [[0.0; NUM_COMPONENTS]; NUM_COMPONENTS];
        for (dst, src) in out.iter_mut().zip(&m.rows) {
            dst.copy_from_slice(src);
        }
        Ok(out)
    }
}

impl CoefficientTable {
    /// Build a validated table from matrix text.
    ///
    /// Expects component vectors `M E K G Q F S W` (21 entries), binary
    /// matrices `Ex Ux Kx Gx` (21x21) and term vectors
    /// `a b c k u g q f s w` (58 entries). Later assignments win.
    pub fn from_matrix_source(source: &str) -> Aga8Result<Self> {
        let matrices = parse_matrices(source)?;
        let lookup = Lookup {
            matrices: &matrices,
        };

        let [m, e, k, g, q, f, s, w] = ["M", "E", "K", "G", "Q", "F", "S", "W"]
            .map(|name| lookup.vector::<NUM_COMPONENTS>(name));
        let (m, e, k, g, q, f, s, w) = (m?, e?, k?, g?, q?, f?, s?, w?);
        let components = std::array::from_fn(|i| ComponentParams {
            molar_mass: m[i],
            energy: e[i],
            size: k[i],
            orientation: g[i],
            quadrupole: q[i],
            high_temperature: f[i],
            dipole: s[i],
            association: w[i],
        });

        let binary = BinaryParams {
            energy: lookup.square("Ex")?,
            conformal: lookup.square("Ux")?,
            size: lookup.square("Kx")?,
            orientation: lookup.square("Gx")?,
        };

        let [ta, tb, tc, tk, tu, tg, tq, tf, ts, tw] =
            ["a", "b", "c", "k", "u", "g", "q", "f", "s", "w"]
                .map(|name| lookup.vector::<NUM_TERMS>(name));
        let (ta, tb, tc, tk, tu) = (ta?, tb?, tc?, tk?, tu?);
        let (tg, tq, tf, ts, tw) = (tg?, tq?, tf?, ts?, tw?);
        let terms = std::array::from_fn(|n| TermCoeffs {
            a: ta[n],
            b: tb[n],
            c: tc[n],
            k: tk[n],
            u: tu[n],
            g: tg[n],
            q: tq[n],
            f: tf[n],
            s: ts[n],
            w: tw[n],
        });

        tracing::debug!(matrices = matrices.len(), "loaded coefficient source");
        CoefficientTable::new(components, binary, terms)
    }
}
