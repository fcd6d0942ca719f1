use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use super::lookup::{require_employee, require_ref, resolve_ref};
use super::validation::{non_empty, not_in_future, required_date, today, unique};
use crate::db::entities::{country, employee, museum};
use crate::db::repositories::EmployeeRepository;
use crate::dto::EmployeePayload;
use crate::error::{AppError, Result};

pub struct EmployeeService {
    db: DatabaseConnection,
}

impl EmployeeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: EmployeePayload) -> Result<employee::Model> {
        info!("Starting employee creation");
        let txn = self.db.begin().await?;

        let name = checked_name(&txn, payload.name, None).await?;
        let birth_date = required_date(payload.birth_date, "birth date")?;
        not_in_future(birth_date, today(), "birth date")?;
        let birth_country_id =
            require_ref::<country::Entity, _>(&txn, payload.birth_country, "birth country").await?;
        let museum_id = require_ref::<museum::Entity, _>(&txn, payload.museum, "museum").await?;

        let employee = EmployeeRepository::new(&txn)
            .create(employee::ActiveModel {
                name: Set(name),
                image: Set(payload.image),
                address: Set(payload.address),
                neighborhood: Set(payload.neighborhood),
                birth_date: Set(Some(birth_date)),
                birth_country_id: Set(Some(birth_country_id)),
                museum_id: Set(Some(museum_id)),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;
        info!("Finished employee creation with id {}", employee.id);
        Ok(employee)
    }

    pub async fn get_all(&self) -> Result<Vec<employee::Model>> {
        info!("Starting lookup of all employees");
        let employees = EmployeeRepository::new(&self.db).find_all().await?;
        info!("Finished lookup of {} employees", employees.len());
        Ok(employees)
    }

    pub async fn get(&self, id: i32) -> Result<employee::Model> {
        info!("Starting lookup of employee {}", id);
        let employee = require_employee(&self.db, id).await?;
        info!("Finished lookup of employee {}", id);
        Ok(employee)
    }

    pub async fn update(&self, id: i32, payload: EmployeePayload) -> Result<employee::Model> {
        info!("Starting update of employee {}", id);
        let txn = self.db.begin().await?;
        let existing = require_employee(&txn, id).await?;

        let name = checked_name(&txn, payload.name, Some(id)).await?;
        let birth_country_id =
            resolve_ref::<country::Entity, _>(&txn, payload.birth_country, "birth country").await?;
        let museum_id = resolve_ref::<museum::Entity, _>(&txn, payload.museum, "museum").await?;

        let mut active: employee::ActiveModel = existing.into();
        active.name = Set(name);
        active.image = Set(payload.image);
        active.address = Set(payload.address);
        active.neighborhood = Set(payload.neighborhood);
        active.birth_date = Set(payload.birth_date);
        if birth_country_id.is_some() {
            active.birth_country_id = Set(birth_country_id);
        }
        if museum_id.is_some() {
            active.museum_id = Set(museum_id);
        }
        let employee = EmployeeRepository::new(&txn).update(active).await?;

        txn.commit().await?;
        info!("Finished update of employee {}", id);
        Ok(employee)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        info!("Starting deletion of employee {}", id);
        let txn = self.db.begin().await?;
        let employee = require_employee(&txn, id).await?;

        if employee.museum_id.is_some() {
            return Err(AppError::illegal(
                "Unable to delete the employee because it is associated to a museum",
            ));
        }

        EmployeeRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;
        info!("Finished deletion of employee {}", id);
        Ok(())
    }
}

async fn checked_name<C: ConnectionTrait>(
    conn: &C,
    name: Option<String>,
    current: Option<i32>,
) -> Result<String> {
    let name = non_empty(name, "name")?;
    let same_name = EmployeeRepository::new(conn).find_by_name(&name).await?;
    unique(same_name.iter().map(|e| e.id), current, "name")?;
    Ok(name)
}
