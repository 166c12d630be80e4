use std::cmp::Ordering;

/// A named configuration value, with bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// The value, moved within the bounds of the option if needed.
    ///
    /// A value which cannot be compared with the bounds (e.g. NaN) is replaced by the minimum.
    pub fn bounded_value(&self) -> T {
        let (min, max) = self.min_max();
        match (self.value.partial_cmp(&min), self.value.partial_cmp(&max)) {
            (Some(Ordering::Less), _) => {
                log::warn!("{} below minimum, using the minimum", self.name);
                min
            }
            (_, Some(Ordering::Greater)) => {
                log::warn!("{} above maximum, using the maximum", self.name);
                max
            }
            (Some(_), Some(_)) => self.value.clone(),
            _ => {
                log::warn!("{} is not comparable with its bounds, using the minimum", self.name);
                min
            }
        }
    }
}
