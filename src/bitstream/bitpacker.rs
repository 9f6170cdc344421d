/// Packs variable-length codewords into a byte buffer, most significant
/// bit first. Call flush() before reading the output or bits may be left
/// in the internal queue.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u128,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function, drains whole bytes from the queue.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append the low `len` bits of `bits` to the stream, most significant
    /// of those bits first. `len` may be 0-64.
    pub fn out_bits(&mut self, bits: u64, len: u8) {
        if len == 0 {
            return;
        }
        self.queue <<= len; //shift queue by bit length
        self.queue |= (bits & (u64::MAX >> (64 - len as u32))) as u128; //add data portion to queue
        self.q_bits += len; //update depth of queue bits
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits of the last byte.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.write_stream();
        }
    }

    /// Debugging function to return the bytes.bits written so far.
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            ((self.output.len() * 8) + self.q_bits as usize) / 8,
            ((self.output.len() * 8) + self.q_bits as usize) % 8
        )
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn whole_byte_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(0b00100001, 8);
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
    }

    #[test]
    fn cross_boundary_test() {
        // Three bits, then six: 111_10000 1(pad).
        let mut bp = BitPacker::new(100);
        bp.out_bits(0b111, 3);
        bp.out_bits(0b100001, 6);
        bp.flush();
        assert_eq!(bp.output, vec![0b1111_0000, 0b1000_0000]);
    }

    #[test]
    fn padding_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(0b1, 1);
        bp.flush();
        assert_eq!(bp.output, vec![0b1000_0000]);
        assert_eq!(bp.loc(), "[1.0]");
    }

    #[test]
    fn masks_high_bits_test() {
        // Only the low `len` bits of the value may reach the stream.
        let mut bp = BitPacker::new(100);
        bp.out_bits(u64::MAX, 4);
        bp.out_bits(0, 4);
        bp.flush();
        assert_eq!(bp.output, vec![0b1111_0000]);
    }

    #[test]
    fn full_width_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(u64::MAX, 64);
        bp.flush();
        assert_eq!(bp.output, vec![0xff; 8]);
    }

    #[test]
    fn zero_len_is_noop_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(0b101, 0);
        bp.flush();
        assert!(bp.output.is_empty());
    }
}
