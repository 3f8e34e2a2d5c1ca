use bytemuck::{self as bm, Pod, Zeroable};

/// A `T` stored in big-endian byte order.
#[repr(transparent)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Be<T>(T) where T: Pod;

impl<T> std::fmt::Debug for Be<T> where T: Pod + std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} (be)", self.get())
    }
}

impl<T> Be<T> where T: Pod {
    pub fn get(mut self) -> T {
        if cfg!(target_endian = "little") {
            bm::bytes_of_mut(&mut self.0).reverse();
        }
        self.0
    }
}

impl<T> From<T> for Be<T> where T: Pod {
    fn from(mut x: T) -> Self {
        if cfg!(target_endian = "little") {
            bm::bytes_of_mut(&mut x).reverse();
        }
        Be(x)
    }
}

#[cfg(test)]
#[test]
fn be_reads_network_order() {
    let raw: Be<i32> = bm::pod_read_unaligned(&[0xff, 0xff, 0xff, 0xfe]);
    assert_eq!(raw.get(), -2);
    let raw: Be<u32> = bm::pod_read_unaligned(&[0x00, 0x00, 0x19, 0x07]);
    assert_eq!(raw.get(), 0x1907);
    assert_eq!(bm::bytes_of(&Be::from(0x8366_i32)), &[0x00, 0x00, 0x83, 0x66]);
}
