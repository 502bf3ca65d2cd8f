use tracing::info;

use crate::models::vacancy::Vacancy;
use crate::registry::SharedRegistry;

#[derive(Clone)]
pub struct VacancyService {
    registry: SharedRegistry,
}

impl VacancyService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub fn create(
        &self,
        title: String,
        description: String,
        closing_date: String,
        contact: String,
    ) -> Vacancy {
        let mut registry = self.registry.write().expect("registry lock poisoned");
        let vacancy = registry.create_vacancy(title, description, closing_date, contact);
        info!(vacancy_id = vacancy.id, title = %vacancy.title, "vacancy created");
        vacancy
    }

    pub fn get_by_id(&self, id: u32) -> Option<Vacancy> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .get(id)
    }

    pub fn list_open(&self) -> Vec<Vacancy> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .open()
    }

    pub fn list_closed(&self) -> Vec<Vacancy> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .closed()
    }

    pub fn close(&self, id: u32) {
        let mut registry = self.registry.write().expect("registry lock poisoned");
        registry.close(id);
        info!(vacancy_id = id, "vacancy close requested");
    }
}
