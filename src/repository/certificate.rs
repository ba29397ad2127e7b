use diesel::prelude::*;

use crate::{
    domain::{
        certificate::{Certificate, NewCertificate, UpdateCertificate},
        types::{CertificateId, Language},
    },
    models::certificate::{
        Certificate as DbCertificate, NewCertificate as DbNewCertificate,
        UpdateCertificate as DbUpdateCertificate,
    },
    repository::{
        CertificateReader, CertificateWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CertificateReader for DieselRepository {
    fn list_certificates(&self, lang: Language) -> RepositoryResult<Vec<Certificate>> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;
        let items = certificates::table
            .filter(certificates::lang.eq(lang.as_str()))
            .order((certificates::sort_order.asc(), certificates::id.asc()))
            .select(DbCertificate::as_select())
            .load::<DbCertificate>(&mut conn)?
            .into_iter()
            .map(Certificate::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    fn get_certificate_by_id(&self, id: CertificateId) -> RepositoryResult<Option<Certificate>> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;
        let certificate = certificates::table
            .find(id.get())
            .select(DbCertificate::as_select())
            .first::<DbCertificate>(&mut conn)
            .optional()?;

        Ok(certificate.map(Certificate::try_from).transpose()?)
    }
}

impl CertificateWriter for DieselRepository {
    fn create_certificate(&self, certificate: &NewCertificate) -> RepositoryResult<Certificate> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(certificates::table)
            .values(&DbNewCertificate::from(certificate))
            .returning(DbCertificate::as_returning())
            .get_result::<DbCertificate>(&mut conn)?;

        Ok(Certificate::try_from(created)?)
    }

    fn update_certificate(
        &self,
        id: CertificateId,
        updates: &UpdateCertificate,
    ) -> RepositoryResult<Certificate> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let target = certificates::table.find(id.get());

            let affected = diesel::update(target)
                .set(&DbUpdateCertificate::from(updates))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            if let Some(image) = &updates.image {
                diesel::update(target)
                    .set(certificates::image.eq(image.as_str()))
                    .execute(conn)?;
            }

            let updated = target
                .select(DbCertificate::as_select())
                .first::<DbCertificate>(conn)?;
            Ok(Certificate::try_from(updated)?)
        })
    }

    fn delete_certificate(&self, id: CertificateId) -> RepositoryResult<()> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;
        let affected = diesel::delete(certificates::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
