// Copyright 2025 the xenguide authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The troubleshooting knowledge base, grouped by category.

use crate::types::issue::IssueCategory;
use crate::types::issue::Severity;
use crate::types::issue::TroubleshootingIssue;

pub fn issue_categories() -> &'static [IssueCategory] {
    &ISSUE_CATEGORIES
}

const ISSUE_CATEGORIES: [IssueCategory; 4] = [
    IssueCategory {
        id: "installation",
        title: "Installation Issues",
        emoji: "🔧",
        issues: &[
            TroubleshootingIssue {
                problem: "Xen not appearing in GRUB menu",
                severity: Severity::High,
                symptoms: &[
                    "No Xen option in boot menu",
                    "System boots normally to Linux",
                ],
                solutions: &[
                    "Update GRUB configuration: sudo update-grub",
                    "Verify Xen packages installed: dpkg -l | grep xen",
                    "Check GRUB_DEFAULT in /etc/default/grub",
                    "Manually add Xen entry if needed",
                ],
                prevention: "Always update GRUB after Xen installation",
            },
            TroubleshootingIssue {
                problem: "VT-x not enabled error",
                severity: Severity::Critical,
                symptoms: &[
                    "Error during domain creation",
                    "HVM domains fail to start",
                ],
                solutions: &[
                    "Restart and enter BIOS (F10 on HP Pavilion)",
                    "Navigate to Advanced > CPU Configuration",
                    "Enable 'Intel Virtualization Technology'",
                    "Enable 'VT-d' if available",
                    "Save and exit BIOS",
                ],
                prevention: "Verify BIOS settings before Xen installation",
            },
            TroubleshootingIssue {
                problem: "Domain 0 memory issues",
                severity: Severity::Medium,
                symptoms: &["High memory usage in dom0", "Poor VM performance"],
                solutions: &[
                    "Add dom0_mem=8G,max:8G to Xen command line",
                    "Edit /etc/default/grub",
                    "Update GRUB: sudo update-grub",
                    "Reboot to apply changes",
                ],
                prevention: "Always set fixed dom0 memory allocation",
            },
        ],
    },
    IssueCategory {
        id: "hardware",
        title: "HP Pavilion Specific",
        emoji: "💻",
        issues: &[
            TroubleshootingIssue {
                problem: "NVIDIA GPU not isolated for passthrough",
                severity: Severity::High,
                symptoms: &["GPU visible in dom0", "Cannot assign to guest VM"],
                solutions: &[
                    "Enable VT-d in BIOS advanced settings",
                    "Add intel_iommu=on to kernel parameters",
                    "Blacklist nvidia driver: echo 'blacklist nvidia' >> /etc/modprobe.d/blacklist.conf",
                    "Configure VFIO: echo 'vfio-pci' >> /etc/modules",
                    "Update initramfs: sudo update-initramfs -u",
                ],
                prevention: "Configure GPU isolation before installing NVIDIA drivers",
            },
            TroubleshootingIssue {
                problem: "Overheating with multiple VMs",
                severity: Severity::Medium,
                symptoms: &[
                    "High CPU temperatures",
                    "Thermal throttling",
                    "Performance degradation",
                ],
                solutions: &[
                    "Monitor temperatures: sensors command",
                    "Reduce concurrent VM count",
                    "Lower CPU frequency: cpufreq-set -f 2000000",
                    "Improve laptop cooling (external fan)",
                    "Adjust scheduler weights to reduce CPU load",
                ],
                prevention: "Monitor thermal performance and plan VM workloads accordingly",
            },
            TroubleshootingIssue {
                problem: "32GB RAM not fully recognized",
                severity: Severity::Low,
                symptoms: &[
                    "System shows less than 32GB",
                    "Memory allocation errors",
                ],
                solutions: &[
                    "Check BIOS memory settings",
                    "Run memory test: memtest86+",
                    "Verify modules seated properly",
                    "Update BIOS to latest version",
                    "Check for 32-bit OS limitations",
                ],
                prevention: "Verify hardware compatibility before RAM upgrade",
            },
        ],
    },
    IssueCategory {
        id: "networking",
        title: "Networking Problems",
        emoji: "🌐",
        issues: &[
            TroubleshootingIssue {
                problem: "Bridge network not working",
                severity: Severity::High,
                symptoms: &["VMs cannot access network", "No internet in guests"],
                solutions: &[
                    "Check bridge exists: brctl show",
                    "Verify interface assignment: ip addr show",
                    "Restart networking: sudo systemctl restart networking",
                    "Check bridge configuration in /etc/netplan/",
                    "Apply netplan: sudo netplan apply",
                ],
                prevention: "Test bridge configuration before creating VMs",
            },
            TroubleshootingIssue {
                problem: "Poor network performance in VMs",
                severity: Severity::Medium,
                symptoms: &["Slow network speeds", "High latency", "Network timeouts"],
                solutions: &[
                    "Use paravirtualized network drivers",
                    "Increase network buffer sizes",
                    "Check for network bridge loops",
                    "Monitor with: xl network-list",
                    "Configure SR-IOV if supported",
                ],
                prevention: "Use PV drivers instead of emulated devices",
            },
        ],
    },
    IssueCategory {
        id: "performance",
        title: "Performance Issues",
        emoji: "⚡",
        issues: &[
            TroubleshootingIssue {
                problem: "Slow VM performance",
                severity: Severity::Medium,
                symptoms: &["Sluggish guest OS", "Poor application performance"],
                solutions: &[
                    "Check CPU allocation: xl vcpu-list",
                    "Verify memory allocation: xl list",
                    "Use paravirtualized drivers",
                    "Pin VCPUs: xl vcpu-pin domain vcpu pcpu",
                    "Adjust scheduler weights: xl sched-credit",
                ],
                prevention: "Properly size VMs and use PV drivers",
            },
            TroubleshootingIssue {
                problem: "High dom0 CPU usage",
                severity: Severity::High,
                symptoms: &[
                    "dom0 consuming excessive CPU",
                    "Poor overall system performance",
                ],
                solutions: &[
                    "Check I/O intensive domains",
                    "Use dedicated driver domains",
                    "Implement CPU pinning for dom0",
                    "Monitor with xentop",
                    "Consider stub domains for HVM",
                ],
                prevention: "Limit dom0 responsibilities and use driver domains",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_issues() {
        for category in issue_categories() {
            assert!(!category.issues.is_empty());
        }
    }

    #[test]
    fn test_search_by_symptom() {
        let category = &issue_categories()[0];
        let hits: Vec<_> = category
            .issues
            .iter()
            .filter(|issue| issue.matches("boot menu"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].problem, "Xen not appearing in GRUB menu");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        for category in issue_categories() {
            for issue in category.issues {
                assert!(issue.matches(""));
            }
        }
    }
}
