use crate::EmitError;

const MAGIC: &[u8; 4] = b"CDF\x01";
const TAG_DIMENSION: i32 = 0x0A;
const TAG_VARIABLE: i32 = 0x0B;
const TYPE_DOUBLE: i32 = 6;

#[derive(Debug, Clone)]
struct Dim {
    name: String,
    len: usize,
}

#[derive(Debug, Clone)]
struct Var {
    name: String,
    dim: usize,
    data: Vec<f64>,
}

/// Builder for a NetCDF classic (CDF-1) file holding rank-1 double
/// variables.
///
/// Dimensions and variables appear in the file in insertion order. Only
/// fixed-size rank-1 `NC_DOUBLE` variables are supported; there is no
/// record dimension and there are no attributes.
#[derive(Debug, Clone, Default)]
pub struct NetcdfBuilder {
    dims: Vec<Dim>,
    vars: Vec<Var>,
}

impl NetcdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a dimension and returns its id.
    pub fn dimension(&mut self, name: &str, len: usize) -> Result<usize, EmitError> {
        if name.is_empty() {
            return Err(EmitError::EmptyName);
        }
        self.dims.push(Dim {
            name: name.to_string(),
            len,
        });
        Ok(self.dims.len() - 1)
    }

    /// Declares a rank-1 double variable over an existing dimension.
    pub fn variable(&mut self, name: &str, dim: usize, data: &[f64]) -> Result<(), EmitError> {
        if name.is_empty() {
            return Err(EmitError::EmptyName);
        }
        let expected = self
            .dims
            .get(dim)
            .ok_or(EmitError::UnknownDimension { index: dim })?
            .len;
        if data.len() != expected {
            return Err(EmitError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        self.vars.push(Var {
            name: name.to_string(),
            dim,
            data: data.to_vec(),
        });
        Ok(())
    }

    /// Serializes the complete file.
    pub fn to_bytes(&self) -> Vec<u8> {
        // First pass with zeroed offsets just measures the header, second
        // pass records each variable's real data offset.
        let header_len = self.header_bytes(&vec![0; self.vars.len()]).len();

        let mut begins = Vec::with_capacity(self.vars.len());
        let mut offset = header_len;
        for var in &self.vars {
            begins.push(offset as i32);
            offset += var.data.len() * 8;
        }

        let mut bytes = self.header_bytes(&begins);
        for var in &self.vars {
            for &v in &var.data {
                bytes.extend_from_slice(&v.to_be_bytes());
            }
        }
        bytes
    }

    fn header_bytes(&self, begins: &[i32]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        put_i32(&mut buf, 0); // numrecs: no record dimension

        if self.dims.is_empty() {
            put_absent(&mut buf);
        } else {
            put_i32(&mut buf, TAG_DIMENSION);
            put_i32(&mut buf, self.dims.len() as i32);
            for dim in &self.dims {
                put_name(&mut buf, &dim.name);
                put_i32(&mut buf, dim.len as i32);
            }
        }

        // Global attributes: none.
        put_absent(&mut buf);

        if self.vars.is_empty() {
            put_absent(&mut buf);
        } else {
            put_i32(&mut buf, TAG_VARIABLE);
            put_i32(&mut buf, self.vars.len() as i32);
            for (var, &begin) in self.vars.iter().zip(begins) {
                put_name(&mut buf, &var.name);
                put_i32(&mut buf, 1); // rank
                put_i32(&mut buf, var.dim as i32);
                put_absent(&mut buf); // variable attributes: none
                put_i32(&mut buf, TYPE_DOUBLE);
                put_i32(&mut buf, (var.data.len() * 8) as i32);
                put_i32(&mut buf, begin);
            }
        }

        buf
    }
}

fn put_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// An absent list is a zero tag followed by a zero count.
fn put_absent(buf: &mut Vec<u8>) {
    put_i32(buf, 0);
    put_i32(buf, 0);
}

/// Names are a length-prefixed byte string zero-padded to a 4-byte
/// boundary.
fn put_name(buf: &mut Vec<u8>, name: &str) {
    put_i32(buf, name.len() as i32);
    buf.extend_from_slice(name.as_bytes());
    let pad = (4 - name.len() % 4) % 4;
    buf.extend_from_slice(&[0u8; 3][..pad]);
}

#[cfg(test)]
mod tests {
    use super::NetcdfBuilder;

    fn i32_at(bytes: &[u8], at: usize) -> i32 {
        i32::from_be_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    fn f64_at(bytes: &[u8], at: usize) -> f64 {
        f64::from_be_bytes(bytes[at..at + 8].try_into().unwrap())
    }

    /// Walks the header and returns, per variable, its name and begin
    /// offset.
    fn parse_vars(bytes: &[u8]) -> Vec<(String, usize, i32)> {
        assert_eq!(&bytes[0..4], b"CDF\x01");
        assert_eq!(i32_at(bytes, 4), 0); // numrecs

        let mut at = 8;
        let ndims = {
            assert_eq!(i32_at(bytes, at), 0x0A);
            let n = i32_at(bytes, at + 4);
            at += 8;
            n
        };
        for _ in 0..ndims {
            let name_len = i32_at(bytes, at) as usize;
            at += 4 + name_len + (4 - name_len % 4) % 4;
            at += 4; // dim length
        }

        // Global attributes: absent.
        assert_eq!(i32_at(bytes, at), 0);
        assert_eq!(i32_at(bytes, at + 4), 0);
        at += 8;

        assert_eq!(i32_at(bytes, at), 0x0B);
        let nvars = i32_at(bytes, at + 4);
        at += 8;

        let mut vars = Vec::new();
        for _ in 0..nvars {
            let name_len = i32_at(bytes, at) as usize;
            let name = String::from_utf8(bytes[at + 4..at + 4 + name_len].to_vec()).unwrap();
            at += 4 + name_len + (4 - name_len % 4) % 4;

            assert_eq!(i32_at(bytes, at), 1); // rank
            at += 4;
            at += 4; // dimid
            assert_eq!(i32_at(bytes, at), 0); // vatt absent
            assert_eq!(i32_at(bytes, at + 4), 0);
            at += 8;
            assert_eq!(i32_at(bytes, at), 6); // NC_DOUBLE
            at += 4;
            let vsize = i32_at(bytes, at) as usize;
            at += 4;
            let begin = i32_at(bytes, at);
            at += 4;

            vars.push((name, vsize, begin));
        }
        vars
    }

    fn fit_artifact() -> (NetcdfBuilder, Vec<f64>, Vec<f64>) {
        let func_hor: Vec<f64> = (0..51).map(|i| 1.0 - i as f64 / 50.0).collect();
        let func_ver: Vec<f64> = (0..51).map(|i| (1.0 - i as f64 / 50.0).powi(2)).collect();
        let scaleth: Vec<f64> = (0..8).map(|i| 0.2 + 0.1 * i as f64).collect();
        let scaleh = vec![0.5; 8];
        let scalev = vec![0.4; 8];

        let mut nc = NetcdfBuilder::new();
        let nnd = nc.dimension("nnd", 51).unwrap();
        let nscaleth = nc.dimension("nscaleth", 8).unwrap();
        nc.variable("scaleth", nscaleth, &scaleth).unwrap();
        nc.variable("scaleh", nscaleth, &scaleh).unwrap();
        nc.variable("func_hor", nnd, &func_hor).unwrap();
        nc.variable("scalev", nscaleth, &scalev).unwrap();
        nc.variable("func_ver", nnd, &func_ver).unwrap();

        (nc, func_hor, func_ver)
    }

    #[test]
    fn header_layout_matches_classic_format() {
        let (nc, ..) = fit_artifact();
        let bytes = nc.to_bytes();

        let vars = parse_vars(&bytes);
        let names: Vec<&str> = vars.iter().map(|(n, ..)| n.as_str()).collect();
        assert_eq!(names, ["scaleth", "scaleh", "func_hor", "scalev", "func_ver"]);

        assert_eq!(vars[0].1, 8 * 8);
        assert_eq!(vars[2].1, 51 * 8);

        // Data is laid out contiguously after the header.
        let mut expected_begin = vars[0].2;
        for (_, vsize, begin) in &vars {
            assert_eq!(*begin, expected_begin);
            expected_begin += *vsize as i32;
        }
        assert_eq!(bytes.len(), expected_begin as usize);
    }

    #[test]
    fn variable_data_round_trips_big_endian() {
        let (nc, func_hor, func_ver) = fit_artifact();
        let bytes = nc.to_bytes();
        let vars = parse_vars(&bytes);

        let (_, _, begin_hor) = vars[2];
        for (i, &expected) in func_hor.iter().enumerate() {
            assert_eq!(f64_at(&bytes, begin_hor as usize + 8 * i), expected);
        }

        let (_, _, begin_ver) = vars[4];
        for (i, &expected) in func_ver.iter().enumerate() {
            assert_eq!(f64_at(&bytes, begin_ver as usize + 8 * i), expected);
        }

        let (_, _, begin_th) = vars[0];
        assert_eq!(f64_at(&bytes, begin_th as usize), 0.2);
    }

    #[test]
    fn dimension_names_and_sizes_are_declared() {
        let (nc, ..) = fit_artifact();
        let bytes = nc.to_bytes();

        // dim list starts at byte 8: tag, count, then "nnd" (3 + 1 pad), 51.
        assert_eq!(i32_at(&bytes, 8), 0x0A);
        assert_eq!(i32_at(&bytes, 12), 2);
        assert_eq!(i32_at(&bytes, 16), 3);
        assert_eq!(&bytes[20..23], b"nnd");
        assert_eq!(bytes[23], 0);
        assert_eq!(i32_at(&bytes, 24), 51);
        assert_eq!(i32_at(&bytes, 28), 8);
        assert_eq!(&bytes[32..40], b"nscaleth");
        assert_eq!(i32_at(&bytes, 40), 8);
    }

    #[test]
    fn builder_rejects_bad_variables() {
        let mut nc = NetcdfBuilder::new();
        let dim = nc.dimension("nnd", 3).unwrap();

        assert!(nc.variable("v", dim + 1, &[1.0, 2.0, 3.0]).is_err());
        assert!(nc.variable("v", dim, &[1.0]).is_err());
        assert!(nc.variable("", dim, &[1.0, 2.0, 3.0]).is_err());
        assert!(nc.dimension("", 4).is_err());

        assert!(nc.variable("v", dim, &[1.0, 2.0, 3.0]).is_ok());
    }

    #[test]
    fn empty_builder_is_a_valid_empty_file() {
        let bytes = NetcdfBuilder::new().to_bytes();

        assert_eq!(&bytes[0..4], b"CDF\x01");
        // numrecs, absent dims, absent gatts, absent vars.
        assert_eq!(bytes.len(), 4 + 4 + 8 + 8 + 8);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }
}
