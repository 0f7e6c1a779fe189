pub trait Math {
    fn log_2(self) -> usize;
}

impl Math for usize {
    fn log_2(self) -> usize {
        assert_ne!(self, 0);

        if self.is_power_of_two() {
            (1usize.leading_zeros() - self.leading_zeros()) as usize
        } else {
            (0usize.leading_zeros() - self.leading_zeros()) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_2_rounds_up() {
        assert_eq!(1usize.log_2(), 0);
        assert_eq!(8usize.log_2(), 3);
        assert_eq!(9usize.log_2(), 4);
    }
}
