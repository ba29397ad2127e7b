//! Repository implementation for team members and their social links.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        team::{NewTeamMember, TeamMember, UpdateTeamMember},
        types::{Language, TeamMemberId},
    },
    models::team::{
        NewTeamMember as DbNewTeamMember, NewTeamSocial as DbNewTeamSocial,
        TeamMember as DbTeamMember, TeamSocial as DbTeamSocial,
        UpdateTeamMember as DbUpdateTeamMember,
    },
    repository::{
        DieselRepository, TeamReader, TeamWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn with_socials(
    conn: &mut SqliteConnection,
    members: Vec<DbTeamMember>,
) -> RepositoryResult<Vec<TeamMember>> {
    use crate::schema::team_socials;

    let socials = DbTeamSocial::belonging_to(&members)
        .order(team_socials::id.asc())
        .select(DbTeamSocial::as_select())
        .load::<DbTeamSocial>(conn)?;
    let grouped = socials.grouped_by(&members);

    let members = members
        .into_iter()
        .zip(grouped)
        .map(|(member, socials)| member.into_domain(socials))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(members)
}

fn load_member(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<Option<TeamMember>> {
    use crate::schema::team;

    let member = team::table
        .find(id)
        .select(DbTeamMember::as_select())
        .first::<DbTeamMember>(conn)
        .optional()?;

    match member {
        Some(member) => Ok(with_socials(conn, vec![member])?.pop()),
        None => Ok(None),
    }
}

fn insert_socials(
    conn: &mut SqliteConnection,
    team_id: i32,
    socials: &[crate::domain::team::NewTeamSocial],
) -> RepositoryResult<()> {
    use crate::schema::team_socials;

    let rows: Vec<DbNewTeamSocial> = socials
        .iter()
        .map(|social| DbNewTeamSocial::for_member(team_id, social))
        .collect();
    if !rows.is_empty() {
        diesel::insert_into(team_socials::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

impl TeamReader for DieselRepository {
    fn list_team_members(&self, lang: Language) -> RepositoryResult<Vec<TeamMember>> {
        use crate::schema::team;

        let mut conn = self.conn()?;
        let members = team::table
            .filter(team::lang.eq(lang.as_str()))
            .order((team::sort_order.asc(), team::id.asc()))
            .select(DbTeamMember::as_select())
            .load::<DbTeamMember>(&mut conn)?;

        with_socials(&mut conn, members)
    }

    fn get_team_member_by_id(&self, id: TeamMemberId) -> RepositoryResult<Option<TeamMember>> {
        let mut conn = self.conn()?;
        load_member(&mut conn, id.get())
    }
}

impl TeamWriter for DieselRepository {
    fn create_team_member(&self, member: &NewTeamMember) -> RepositoryResult<TeamMember> {
        use crate::schema::team;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let team_id = diesel::insert_into(team::table)
                .values(&DbNewTeamMember::from(member))
                .returning(team::id)
                .get_result::<i32>(conn)?;

            insert_socials(conn, team_id, &member.socials)?;

            load_member(conn, team_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_team_member(
        &self,
        id: TeamMemberId,
        updates: &UpdateTeamMember,
    ) -> RepositoryResult<TeamMember> {
        use crate::schema::{team, team_socials};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let target = team::table.find(id.get());

            let affected = diesel::update(target)
                .set(&DbUpdateTeamMember::from(updates))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            if let Some(photo) = &updates.photo {
                diesel::update(target)
                    .set(team::photo.eq(Some(photo.as_str())))
                    .execute(conn)?;
            }

            if let Some(socials) = &updates.socials {
                diesel::delete(team_socials::table.filter(team_socials::team_id.eq(id.get())))
                    .execute(conn)?;
                insert_socials(conn, id.get(), socials)?;
            }

            load_member(conn, id.get())?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_team_member(&self, id: TeamMemberId) -> RepositoryResult<()> {
        use crate::schema::{team, team_socials};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(team_socials::table.filter(team_socials::team_id.eq(id.get())))
                .execute(conn)?;
            let affected = diesel::delete(team::table.find(id.get())).execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
