/// Returns a frequency count of the input data as a fixed 256-slot array,
/// indexed directly by byte value.
pub fn freqs(data: &[u8]) -> [u64; 256] {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Count how many distinct byte values appear in the frequency table.
pub fn distinct_symbols(freqs: &[u64; 256]) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}

#[cfg(test)]
mod test {
    use super::{distinct_symbols, freqs};

    #[test]
    fn empty_input_test() {
        let f = freqs(&[]);
        assert!(f.iter().all(|&c| c == 0));
        assert_eq!(distinct_symbols(&f), 0);
    }

    #[test]
    fn count_test() {
        let f = freqs("aaaabbbcc".as_bytes());
        assert_eq!(f[b'a' as usize], 4);
        assert_eq!(f[b'b' as usize], 3);
        assert_eq!(f[b'c' as usize], 2);
        assert_eq!(f[b'd' as usize], 0);
        assert_eq!(distinct_symbols(&f), 3);
    }

    #[test]
    fn all_values_test() {
        let data: Vec<u8> = (0..=255).collect();
        let f = freqs(&data);
        assert!(f.iter().all(|&c| c == 1));
        assert_eq!(distinct_symbols(&f), 256);
    }
}
