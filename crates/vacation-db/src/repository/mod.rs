//! # Repository Module
//!
//! Database repository implementations for the record store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SyncService                                                            │
//! │       │  db.vacations().save(&record)                                   │
//! │       ▼                                                                 │
//! │  VacationRepository                                                     │
//! │  ├── save(&self, record)          insert or overwrite in place          │
//! │  ├── find_by_id(&self, id)                                              │
//! │  ├── find_all(&self)                                                    │
//! │  ├── exists_by_id(&self, id)                                            │
//! │  └── delete_by_id(&self, id)      missing id is a no-op                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod vacation;
