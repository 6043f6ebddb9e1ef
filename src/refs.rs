use pdf_writer::Ref;

/// Hands out PDF object ids, in the order the objects are allocated
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn gen(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut refs = ObjectReferences::new();
        assert_eq!(refs.gen(), Ref::new(1));
        assert_eq!(refs.gen(), Ref::new(2));
        assert_eq!(refs.gen(), Ref::new(3));
    }
}
