use anyhow::Result;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::setup_test_db;
use crate::cargo::CargoStatus;
use crate::{cargo, cargo_movement, vehicle};

/// Test vehicle create and lookup by number
#[tokio::test]
async fn test_vehicle_create_and_find_by_number() -> Result<()> {
    let db = setup_test_db().await?;

    let created = vehicle::create(&db, " AA1234BB ", "Volvo FH16").await?;
    assert_eq!(created.number, "AA1234BB");
    assert!(created.id > 0);

    let found = vehicle::find_by_number(&db, "AA1234BB").await?;
    assert_eq!(found.map(|v| v.id), Some(created.id));

    let missing = vehicle::find_by_number(&db, "ZZ0000ZZ").await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn test_vehicle_number_is_unique_and_required() -> Result<()> {
    let db = setup_test_db().await?;

    vehicle::create(&db, "AA0001AA", "MAN TGX").await?;
    let dup = vehicle::create(&db, "AA0001AA", "DAF XF").await;
    assert!(dup.is_err());

    let blank = vehicle::create(&db, "   ", "DAF XF").await;
    assert!(matches!(blank, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}

/// Test cargo CRUD with the vehicle join
#[tokio::test]
async fn test_cargo_crud_with_vehicle() -> Result<()> {
    let db = setup_test_db().await?;
    let truck = vehicle::create(&db, "KA7777KA", "Scania R").await?;

    let created = cargo::ActiveModel {
        description: Set("Pallets of bricks".into()),
        weight: Set(1250.5),
        status: Set(CargoStatus::Pending),
        vehicle_id: Set(truck.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let (found, joined) = cargo::Entity::find_by_id(created.id)
        .find_also_related(vehicle::Entity)
        .one(&db)
        .await?
        .expect("cargo row");
    assert_eq!(found.description, "Pallets of bricks");
    assert_eq!(found.status, CargoStatus::Pending);
    assert_eq!(joined.map(|v| v.number), Some("KA7777KA".to_string()));

    let mut am: cargo::ActiveModel = found.into();
    am.status = Set(CargoStatus::Delivered);
    let updated = am.update(&db).await?;
    assert_eq!(updated.status, CargoStatus::Delivered);

    let delivered = cargo::Entity::find()
        .filter(cargo::Column::Status.eq(CargoStatus::Delivered))
        .all(&db)
        .await?;
    assert_eq!(delivered.len(), 1);

    cargo::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(cargo::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_cargo_movement_ordering() -> Result<()> {
    let db = setup_test_db().await?;
    let truck = vehicle::create(&db, "BC1010BC", "Iveco S-Way").await?;
    let load = cargo::ActiveModel {
        description: Set("Steel coils".into()),
        weight: Set(20000.0),
        status: Set(CargoStatus::InTransit),
        vehicle_id: Set(truck.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let now = Utc::now();
    for (hours, from, to) in [(2, "Kyiv", "Lviv"), (1, "Lviv", "Uzhhorod")] {
        cargo_movement::ActiveModel {
            cargo_id: Set(load.id),
            movement_date: Set(now - Duration::hours(hours)),
            from_location: Set(from.into()),
            to_location: Set(to.into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    let newest_first = cargo_movement::Entity::find()
        .filter(cargo_movement::Column::CargoId.eq(load.id))
        .order_by_desc(cargo_movement::Column::MovementDate)
        .all(&db)
        .await?;
    assert_eq!(newest_first.len(), 2);
    assert_eq!(newest_first[0].from_location, "Lviv");
    assert_eq!(newest_first[1].from_location, "Kyiv");
    Ok(())
}

#[test]
fn cargo_status_parses_and_serializes() {
    assert_eq!("in_transit".parse::<CargoStatus>().unwrap(), CargoStatus::InTransit);
    assert!("lost".parse::<CargoStatus>().is_err());
    assert_eq!(serde_json::to_string(&CargoStatus::InTransit).unwrap(), "\"IN_TRANSIT\"");
    assert_eq!(CargoStatus::Cancelled.to_string(), "CANCELLED");
}

#[tokio::test]
async fn test_folded_search_columns_follow_saves() -> Result<()> {
    let db = setup_test_db().await?;
    let truck = vehicle::create(&db, "ВІ1234АА", "Scania R").await?;
    assert_eq!(truck.number_folded, "ві1234аа");

    let created = cargo::ActiveModel {
        description: Set("Скло ВІКОННЕ".into()),
        weight: Set(300.0),
        status: Set(CargoStatus::Pending),
        vehicle_id: Set(truck.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(created.description_folded, "скло віконне");

    let mut am: cargo::ActiveModel = created.into();
    am.description = Set("Plate GLASS".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.description_folded, "plate glass");

    // untouched description keeps its folded copy
    let mut am: cargo::ActiveModel = updated.into();
    am.status = Set(CargoStatus::Delivered);
    let updated = am.update(&db).await?;
    assert_eq!(updated.description_folded, "plate glass");
    Ok(())
}
