#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub instances: usize,
    pub layouts: usize,
    pub groups: usize,
    pub max_depth: usize,
}

impl RegistryStats {
    pub fn record_instance(&mut self, is_layout: bool, depth: usize) {
        self.instances += 1;
        if is_layout {
            self.layouts += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_group(&mut self) {
        self.groups += 1;
    }
}
