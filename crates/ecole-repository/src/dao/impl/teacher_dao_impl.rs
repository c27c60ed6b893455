//! Teacher DAO body shared by every backend.

/// Defines a [`TeacherDao`](crate::dao::TeacherDao) over a concrete sqlx pool.
///
/// `$inserted_id` maps the backend's query result to the generated key.
macro_rules! teacher_dao_impl {
    ($name:ident, $pool:ty, $backend:literal, $inserted_id:path) => {
        #[doc = concat!($backend, "-backed teacher DAO.")]
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
        impl ::ecole_core::Dao<::ecole_core::Teacher, ::ecole_core::TeacherId> for $name {
            async fn create(
                &self,
                teacher: &::ecole_core::Teacher,
            ) -> ::ecole_core::EcoleResult<::ecole_core::TeacherId> {
                ::tracing::debug!(
                    backend = $backend,
                    "DAO: creating teacher for person {}",
                    teacher.person_id
                );

                let result = ::sqlx::query($crate::dao::sql::TEACHER_INSERT)
                    .bind(teacher.start_date)
                    .bind(teacher.person_id)
                    .execute(&self.pool)
                    .await?;

                Ok(::ecole_core::TeacherId::new($inserted_id(&result)?))
            }

            async fn read(
                &self,
                id: ::ecole_core::TeacherId,
            ) -> ::ecole_core::EcoleResult<Option<::ecole_core::Teacher>> {
                ::tracing::debug!(backend = $backend, "DAO: reading teacher {}", id);

                let row = ::sqlx::query_as::<_, $crate::dao::rows::TeacherRow>(
                    $crate::dao::sql::TEACHER_SELECT_BY_ID,
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

                Ok(row.map(::ecole_core::Teacher::from))
            }

            async fn update(&self, teacher: &::ecole_core::Teacher) -> ::ecole_core::EcoleResult<bool> {
                ::tracing::debug!(backend = $backend, "DAO: updating teacher {}", teacher.id);

                let result = ::sqlx::query($crate::dao::sql::TEACHER_UPDATE)
                    .bind(teacher.start_date)
                    .bind(teacher.person_id)
                    .bind(teacher.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }

            async fn delete(&self, teacher: &::ecole_core::Teacher) -> ::ecole_core::EcoleResult<bool> {
                ::tracing::debug!(backend = $backend, "DAO: deleting teacher {}", teacher.id);

                let result = ::sqlx::query($crate::dao::sql::TEACHER_DELETE)
                    .bind(teacher.id)
                    .execute(&self.pool)
                    .await?;

                Ok(result.rows_affected() > 0)
            }
        }

        #[::async_trait::async_trait]
        impl $crate::dao::TeacherDao for $name {
            async fn get_courses(
                &self,
                teacher_id: ::ecole_core::TeacherId,
            ) -> ::ecole_core::EcoleResult<Vec<::ecole_core::CourseSummary>> {
                ::tracing::debug!(backend = $backend, "DAO: listing courses of teacher {}", teacher_id);

                let rows = ::sqlx::query_as::<_, $crate::dao::rows::CourseSummaryRow>(
                    $crate::dao::sql::TEACHER_SELECT_COURSES,
                )
                .bind(teacher_id)
                .fetch_all(&self.pool)
                .await?;

                Ok(rows.into_iter().map(::ecole_core::CourseSummary::from).collect())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}
