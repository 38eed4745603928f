// modal image carousel
//
// one slide per view, with wrap-around only when there is more than one
// slide.  a carousel is rebuilt every time the modal opens and dropped when it
// closes, so there is no state to carry between projects
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    looping: bool,
}

impl Carousel {
    // None for an empty slide set, the modal shows a placeholder instead
    pub fn new(len: usize) -> Option<Carousel> {
        (len > 0).then_some(Carousel {
            len,
            index: 0,
            looping: len > 1,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn has_next(&self) -> bool {
        self.looping || self.index + 1 < self.len
    }

    pub fn has_prev(&self) -> bool {
        self.looping || self.index > 0
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        } else if self.looping {
            self.index = 0;
        }
    }

    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        } else if self.looping {
            self.index = self.len - 1;
        }
    }

    // pagination bullets, out of range is ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_carousel() {
        assert_eq!(Carousel::new(0), None);
    }

    #[test]
    fn single_slide_does_not_loop() {
        let mut c = Carousel::new(1).unwrap();
        assert!(!c.is_looping());
        assert!(!c.has_next());
        assert!(!c.has_prev());

        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn multiple_slides_wrap() {
        let mut c = Carousel::new(3).unwrap();
        assert!(c.is_looping());

        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(2).unwrap();
        c.go_to(1);
        assert_eq!(c.index(), 1);
        c.go_to(5);
        assert_eq!(c.index(), 1);
    }
}
