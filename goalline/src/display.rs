use std::fmt::{Display, Formatter};

/// Renders a slice as `[a, b, c]`, honouring any precision given in the format spec.
pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}
impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{item:.precision$}")?,
                None => write!(f, "{item}")?,
            }
        }
        write!(f, "]")
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_slice() {
        let data = vec![4, 5, 6, 8];
        assert_eq!("[4, 5, 6, 8]", format!("{}", DisplaySlice::from(&*data)));

        let data: Vec<usize> = vec![];
        assert_eq!("[]", format!("{}", DisplaySlice::from(&*data)));
    }

    #[test]
    fn display_slice_with_precision() {
        let data = vec![0.123456, 0.5];
        assert_eq!("[0.123, 0.500]", format!("{:.3}", DisplaySlice::from(&*data)));
    }
}
