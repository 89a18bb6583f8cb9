use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{
    BootstrapOutcome, ProgressReporter, RegionLister, ReportSink, SecurityGroupDescriber,
};
use crate::scan::domain::{MatchRecord, SecurityGroup};
use crate::scan::policies::{first_open_ingress, ALL_PROTOCOLS, UNRESTRICTED_CIDR};
use crate::shared::Result;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::time::Instant;
use uuid::Uuid;

/// ScanSecurityGroupsUseCase - Core use case for the open-ingress audit
///
/// Drives the full account sweep: bootstrap the report sink, list the
/// regions visible to the active credentials, fetch each region's
/// security groups through a bounded worker pool, evaluate every group
/// against the open-ingress policy, and stream each match into the sink.
///
/// All infrastructure is injected through the outbound ports, so the
/// sweep itself never touches the provider or the filesystem directly.
///
/// # Type Parameters
/// * `RL` - RegionLister implementation
/// * `SGD` - SecurityGroupDescriber implementation
/// * `RS` - ReportSink implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanSecurityGroupsUseCase<RL, SGD, RS, PR> {
    region_lister: RL,
    group_describer: SGD,
    report_sink: RS,
    progress_reporter: PR,
}

impl<RL, SGD, RS, PR> ScanSecurityGroupsUseCase<RL, SGD, RS, PR>
where
    RL: RegionLister,
    SGD: SecurityGroupDescriber,
    RS: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new ScanSecurityGroupsUseCase with injected dependencies
    pub fn new(region_lister: RL, group_describer: SGD, report_sink: RS, progress_reporter: PR) -> Self {
        Self {
            region_lister,
            group_describer,
            report_sink,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// Completes successfully even when nothing matches; the report file
    /// is the sole output artifact. Any retrieval failure aborts the
    /// entire scan, but rows already flushed stay on disk.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        request.validate()?;

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let clock = Instant::now();

        if self.report_sink.bootstrap(request.fresh)? == BootstrapOutcome::PreservedExisting {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Report {} already exists and may hold prior audit history; keeping its content and appending new records",
                self.report_sink.destination()
            ));
        }

        let protocol_label = if request.protocol == ALL_PROTOCOLS {
            "any protocol".to_string()
        } else {
            request.protocol.clone()
        };
        self.progress_reporter.report(&format!(
            "🔎 Scan {}: looking for inbound rules open to {} on port {} ({})",
            run_id, UNRESTRICTED_CIDR, request.port, protocol_label
        ));

        let regions = self.region_lister.list_regions().await?;
        let region_count = regions.len();
        self.progress_reporter.report(&format!(
            "🌍 {} region(s) visible to the current credentials",
            region_count
        ));

        // Regions are independent, so they are fetched through a bounded
        // pool. Results funnel back into this single consumer loop, which
        // is the only writer to the sink: appends stay serialized and each
        // row is flushed before the next result is consumed.
        let describer = &self.group_describer;
        let scans = stream::iter(regions.into_iter().map(move |region| async move {
            let groups = describer.describe_security_groups(&region).await?;
            Ok::<(String, Vec<SecurityGroup>), anyhow::Error>((region, groups))
        }))
        .buffer_unordered(request.concurrency);
        futures::pin_mut!(scans);

        let mut regions_scanned = 0;
        let mut groups_scanned = 0;
        let mut matches_found = 0;

        while let Some(result) = scans.next().await {
            // The first failed region aborts the whole scan; dropping the
            // stream cancels the outstanding region workers.
            let (region, groups) = result?;

            for group in &groups {
                if first_open_ingress(group, request.port, &request.protocol).is_some() {
                    let record = MatchRecord::from_group(group, &region);
                    self.report_sink.append(&record)?;
                    matches_found += 1;
                }
            }

            groups_scanned += groups.len();
            regions_scanned += 1;
            self.progress_reporter
                .report_progress(regions_scanned, region_count, Some(&region));
        }

        let elapsed = clock.elapsed();
        self.progress_reporter.report_completion(&format!(
            "✅ Security-group check finished: {} match(es) across {} group(s) in {} region(s) ({:.1}s). You can find your results in {}",
            matches_found,
            groups_scanned,
            regions_scanned,
            elapsed.as_secs_f64(),
            self.report_sink.destination()
        ));

        Ok(ScanResponse {
            run_id,
            started_at,
            elapsed,
            regions_scanned,
            groups_scanned,
            matches_found,
            destination: self.report_sink.destination(),
        })
    }
}
