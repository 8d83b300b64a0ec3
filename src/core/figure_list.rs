//! Figurenliste: besitzt alle platzierten Figuren in Einfügereihenfolge.

use super::figure::{Figure, FigureId};

/// Geordneter Besitzer aller Figuren. Spätere Figuren werden über früheren gezeichnet.
pub struct FigureList {
    figures: Vec<Box<dyn Figure>>,
    next_id: u64,
}

impl Default for FigureList {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureList {
    /// Erstellt eine leere Liste. IDs beginnen bei 1 (0 ist für Vorschauen reserviert).
    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
            next_id: 1,
        }
    }

    /// Vergibt die nächste freie ID.
    pub fn allocate_id(&mut self) -> FigureId {
        let id = FigureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Hängt eine Figur an und gibt ihre ID zurück.
    pub fn push(&mut self, figure: Box<dyn Figure>) -> FigureId {
        let id = figure.id();
        self.figures.push(figure);
        id
    }

    /// Figur per ID.
    pub fn get(&self, id: FigureId) -> Option<&dyn Figure> {
        self.figures
            .iter()
            .find(|f| f.id() == id)
            .map(|f| f.as_ref())
    }

    /// Mutable Figur per ID.
    pub fn get_mut(&mut self, id: FigureId) -> Option<&mut (dyn Figure + 'static)> {
        self.figures
            .iter_mut()
            .find(|f| f.id() == id)
            .map(|f| f.as_mut())
    }

    /// Entfernt eine Figur und gibt sie zurück.
    pub fn remove(&mut self, id: FigureId) -> Option<Box<dyn Figure>> {
        let index = self.figures.iter().position(|f| f.id() == id)?;
        Some(self.figures.remove(index))
    }

    /// Iteriert in Zeichenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Figure> + '_ {
        self.figures.iter().map(|f| f.as_ref())
    }

    /// Mutable Iteration in Zeichenreihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Figure>> + '_ {
        self.figures.iter_mut()
    }

    /// Anzahl der Figuren.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Gibt `true` zurück, wenn keine Figuren vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::figure::{ContourFigure, PointFigure};
    use glam::Vec2;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut list = FigureList::new();
        let a = list.allocate_id();
        let b = list.allocate_id();
        assert_eq!(a, FigureId(1));
        assert_eq!(b, FigureId(2));
        assert_ne!(a, FigureId::PREVIEW);
    }

    #[test]
    fn test_push_get_remove_keeps_order() {
        let mut list = FigureList::new();
        let id1 = list.allocate_id();
        list.push(Box::new(PointFigure::new(id1, Vec2::ZERO, false)));
        let id2 = list.allocate_id();
        list.push(Box::new(ContourFigure::new(id2)));
        let id3 = list.allocate_id();
        list.push(Box::new(PointFigure::new(id3, Vec2::ONE, false)));

        assert!(list.get(id2).is_some());
        let removed = list.remove(id2);
        assert!(removed.is_some());
        assert!(list.get(id2).is_none());
        assert!(list.remove(id2).is_none());

        let order: Vec<FigureId> = list.iter().map(|f| f.id()).collect();
        assert_eq!(order, vec![id1, id3]);
    }
}
