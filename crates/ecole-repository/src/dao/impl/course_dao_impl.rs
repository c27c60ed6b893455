//! Course DAO body shared by every backend.

/// Defines a [`CourseDao`](crate::dao::CourseDao) over a concrete sqlx pool.
///
/// Create and update validate the course before any SQL is issued.
macro_rules! course_dao_impl {
    ($name:ident, $pool:ty, $backend:literal, $inserted_id:path) => {
        #[doc = concat!($backend, "-backed course DAO.")]
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
        impl ::ecole_core::Dao<::ecole_core::Course, ::ecole_core::CourseId> for $name {
            async fn create(
                &self,
                course: &::ecole_core::Course,
            ) -> ::ecole_core::EcoleResult<::ecole_core::CourseId> {
                ::ecole_core::ValidateExt::validate_request(course)?;
                ::tracing::debug!(backend = $backend, "DAO: creating course {}", course.name);

                let result = ::sqlx::query($crate::dao::sql::COURSE_INSERT)
                    .bind(&course.name)
                    .bind(course.start_date)
                    .bind(course.end_date)
                    .bind(course.teacher_id)
                    .execute(&self.pool)
                    .await?;

                Ok(::ecole_core::CourseId::new($inserted_id(&result)?))
            }

            async fn read(
                &self,
                id: ::ecole_core::CourseId,
            ) -> ::ecole_core::EcoleResult<Option<::ecole_core::Course>> {
                ::tracing::debug!(backend = $backend, "DAO: reading course {}", id);

                let row = ::sqlx::query_as::<_, $crate::dao::rows::CourseRow>(
                    $crate::dao::sql::COURSE_SELECT_BY_ID,
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

                Ok(row.map(::ecole_core::Course::from))
            }

            async fn update(&self, course: &::ecole_core::Course) -> ::ecole_core::EcoleResult<bool> {
                ::ecole_core::ValidateExt::validate_request(course)?;
                ::tracing::debug!(backend = $backend, "DAO: updating course {}", course.id);

                let result = ::sqlx::query($crate::dao::sql::COURSE_UPDATE)
                    .bind(&course.name)
                    .bind(course.start_date)
                    .bind(course.end_date)
                    .bind(course.teacher_id)
                    .bind(course.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }

            async fn delete(&self, course: &::ecole_core::Course) -> ::ecole_core::EcoleResult<bool> {
                ::tracing::debug!(backend = $backend, "DAO: deleting course {}", course.id);

                let result = ::sqlx::query($crate::dao::sql::COURSE_DELETE)
                    .bind(course.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }
        }

        impl $crate::dao::CourseDao for $name {}

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}
