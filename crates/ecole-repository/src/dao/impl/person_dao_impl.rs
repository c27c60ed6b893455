//! Person DAO body shared by every backend.

/// Defines a [`PersonDao`](crate::dao::PersonDao) over a concrete sqlx pool.
///
/// `$inserted_id` maps the backend's query result to the generated key.
macro_rules! person_dao_impl {
    ($name:ident, $pool:ty, $backend:literal, $inserted_id:path) => {
        #[doc = concat!($backend, "-backed person DAO.")]
        #[derive(Clone)]
        pub struct $name {
            pool: $pool,
        }

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            #[must_use]
            pub fn new(pool: $pool) -> Self {
                Self { pool }
            }
        }

        #[::async_trait::async_trait]
        impl ::ecole_core::Dao<::ecole_core::Person, ::ecole_core::PersonId> for $name {
            async fn create(
                &self,
                person: &::ecole_core::Person,
            ) -> ::ecole_core::EcoleResult<::ecole_core::PersonId> {
                ::tracing::debug!(
                    backend = $backend,
                    "DAO: creating person {} {}",
                    person.first_name,
                    person.last_name
                );

                let result = ::sqlx::query($crate::dao::sql::PERSON_INSERT)
                    .bind(&person.first_name)
                    .bind(&person.last_name)
                    .bind(person.age)
                    .bind(person.address_id)
                    .execute(&self.pool)
                    .await?;

                Ok(::ecole_core::PersonId::new($inserted_id(&result)?))
            }

            async fn read(
                &self,
                id: ::ecole_core::PersonId,
            ) -> ::ecole_core::EcoleResult<Option<::ecole_core::Person>> {
                ::tracing::debug!(backend = $backend, "DAO: reading person {}", id);

                let row = ::sqlx::query_as::<_, $crate::dao::rows::PersonRow>(
                    $crate::dao::sql::PERSON_SELECT_BY_ID,
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

                Ok(row.map(::ecole_core::Person::from))
            }

            async fn update(&self, person: &::ecole_core::Person) -> ::ecole_core::EcoleResult<bool> {
                ::tracing::debug!(backend = $backend, "DAO: updating person {}", person.id);

                let result = ::sqlx::query($crate::dao::sql::PERSON_UPDATE)
                    .bind(&person.first_name)
                    .bind(&person.last_name)
                    .bind(person.age)
                    .bind(person.address_id)
                    .bind(person.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }

            async fn delete(&self, person: &::ecole_core::Person) -> ::ecole_core::EcoleResult<bool> {
                ::tracing::debug!(backend = $backend, "DAO: deleting person {}", person.id);

                let result = ::sqlx::query($crate::dao::sql::PERSON_DELETE)
                    .bind(person.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }
        }

        impl $crate::dao::PersonDao for $name {}

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}
